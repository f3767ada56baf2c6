use aether_client_core::{Action, EventId, EventStore, GenerationClient, NewEvent, Page, View};
use dioxus::prelude::*;
use crate::screens::{ConfigErrorScreen, CreateEventScreen, DashboardScreen, EventDetailScreen};
use crate::theme::{spacing, AppColors};
use crate::widgets::Header;

const GLOBAL_CSS: &str = "body { margin: 0; } @keyframes aether-spin { to { transform: rotate(360deg); } }";

/// Root component. Without a generation credential the app refuses to start.
#[component]
pub fn App() -> Element {
    let client = use_hook(|| {
        GenerationClient::from_env().inspect_err(|e| {
            tracing::error!(error = %e, "generation client not configured");
        })
    });

    let body = match client {
        Ok(client) => rsx! { EventsApp { client } },
        Err(e) => rsx! { ConfigErrorScreen { message: e.to_string() } },
    };

    rsx! {
        style { "{GLOBAL_CSS}" }
        div { style: "min-height: 100vh; background: {AppColors::BACKGROUND}; font-family: system-ui, sans-serif;",
            {body}
        }
    }
}

/// Owns the event store and the current view; children only get read copies
/// and report back through callbacks.
#[component]
fn EventsApp(client: GenerationClient) -> Element {
    let mut store = use_signal(EventStore::with_sample_events);
    let mut view = use_signal(View::default);

    let mut navigate = move |action: Action| {
        let next = view.peek().clone().apply(action);
        tracing::info!(view = ?next, "navigate");
        view.set(next);
    };

    let current_screen = {
        let events = store.read();
        let current = view.read();
        match current.resolve(&events) {
            Page::List => rsx! {
                DashboardScreen {
                    events: events.as_slice().to_vec(),
                    on_open: move |id: EventId| navigate(Action::OpenDetail(id)),
                    on_create: move |_| navigate(Action::OpenCreate),
                }
            },
            Page::Create => rsx! {
                CreateEventScreen {
                    client: client.clone(),
                    on_created: move |new_event: NewEvent| {
                        store.write().add_event(new_event);
                        navigate(Action::Submitted);
                    },
                    on_cancel: move |_| navigate(Action::Cancelled),
                }
            },
            Page::Detail(event) => rsx! {
                EventDetailScreen {
                    event: event.clone(),
                    on_back: move |_| navigate(Action::Back),
                }
            },
        }
    };

    rsx! {
        Header { on_navigate: move |action: Action| navigate(action) }
        main { style: "max-width: {spacing::CONTENT_WIDTH}; margin: 0 auto; padding: {spacing::SCREEN_PADDING};",
            {current_screen}
        }
    }
}
