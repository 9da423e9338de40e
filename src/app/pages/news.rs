//! News feed page component.
//!
//! Renders a [`NewsFeedView`] held in a signal. Queries run in spawned
//! tasks so the page stays responsive; every click sends its own request.

use dioxus::prelude::*;

use super::placeholder::Placeholder;
use crate::app::components::Layout;
use crate::app::{NewsSourceContext, Route};
use crate::config::Config;
use crate::news::NewsItem;
use crate::view::{LoadState, NewsFeedView};

/// News feed page, routed at `/first`.
#[component]
pub fn First() -> Element {
    let config = use_context::<Config>();
    let source = use_context::<NewsSourceContext>();
    let route = use_route::<Route>();

    // Fresh view per mount, from the factory the route resolves to
    let mounted = use_hook(move || route.view_kind().mount(source.0.clone(), config.results_flag));

    match mounted.into_news_feed() {
        Some(feed) => rsx! { NewsFeedPage { feed } },
        None => rsx! { Placeholder {} },
    }
}

#[component]
fn NewsFeedPage(feed: NewsFeedView) -> Element {
    let mut view = use_signal(move || feed);

    let query = move |_: MouseEvent| {
        let request = view.write().query();
        spawn(async move {
            let outcome = request.run().await;
            view.write().complete(outcome);
        });
    };

    let (results, results_ready, visible, search, selected, selected_ready) = {
        let feed = view.read();
        let state = feed.state();
        (
            state.results().clone(),
            state.results_ready(),
            state
                .visible_results()
                .into_iter()
                .map(|(idx, item)| (idx, item.clone()))
                .collect::<Vec<(usize, NewsItem)>>(),
            state.search_text().to_string(),
            state.selected_text().map(str::to_string),
            state.selected_text_ready(),
        )
    };

    let content = match results {
        LoadState::NotStarted => rsx! {
            p { small { "Press Search to load the news feed." } }
        },
        LoadState::Pending => rsx! {
            article { aria_busy: "true", "Loading news..." }
        },
        LoadState::Failed(err) => rsx! {
            article { class: "status-err", "Could not load the news feed: {err}" }
        },
        LoadState::Loaded(_) if visible.is_empty() => rsx! {
            article { "No news items match." }
        },
        LoadState::Loaded(_) => rsx! {
            ul { class: "news-list",
                for (idx, item) in visible {
                    NewsRow {
                        key: "{idx}",
                        item: item,
                        on_view: move |item: NewsItem| view.write().view_text(&item),
                    }
                }
            }
        },
    };

    let selected_body = match selected {
        Some(text) => rsx! { p { "{text}" } },
        None => rsx! { p { small { "This item has no text." } } },
    };

    rsx! {
        Layout {
            h1 { "News" }

            form {
                role: "search",
                onsubmit: move |evt| evt.prevent_default(),
                input {
                    r#type: "search",
                    placeholder: "Filter by text",
                    value: "{search}",
                    oninput: move |evt| view.write().set_search_text(evt.value()),
                }
                button { r#type: "button", onclick: query, "Search" }
            }

            section { id: "results", "data-ready": "{results_ready}", {content} }

            if selected_ready {
                article { id: "selected-text",
                    header { strong { "Selected" } }
                    {selected_body}
                }
            }
        }
    }
}

#[component]
fn NewsRow(item: NewsItem, on_view: EventHandler<NewsItem>) -> Element {
    let text = item.text().unwrap_or_else(|| "(no text)".to_string());

    rsx! {
        li {
            span { "{text}" }
            button {
                class: "outline",
                onclick: move |_| on_view.call(item.clone()),
                "View"
            }
        }
    }
}
