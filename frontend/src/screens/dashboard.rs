use aether_client_core::{Event, EventId};
use dioxus::prelude::*;
use crate::theme::{button_style, spacing, AppColors};
use crate::widgets::{EventCard, Panel};

#[component]
pub fn DashboardScreen(
    events: Vec<Event>,
    on_open: EventHandler<EventId>,
    on_create: EventHandler<()>,
) -> Element {
    let create_style = button_style(AppColors::BRAND_BLUE, false);

    rsx! {
        div {
            div { style: "margin-bottom: {spacing::XL};",
                h1 { style: "font-size: 3rem; font-weight: 700; color: {AppColors::ON_SURFACE}; margin: 0;",
                    "Upcoming Events"
                }
                p { style: "margin-top: {spacing::MD}; font-size: 1.25rem; color: {AppColors::MUTED};",
                    "Discover and manage your next big event with the power of AI."
                }
            }
            if events.is_empty() {
                Panel {
                    div { style: "text-align: center; padding: 48px 0;",
                        h2 { style: "color: {AppColors::ON_SURFACE}; margin: 0;", "No Events Found" }
                        p { style: "color: {AppColors::MUTED}; margin-top: {spacing::SM};",
                            "Get started by creating a new event."
                        }
                        button {
                            onclick: move |_| on_create.call(()),
                            style: "{create_style} margin-top: {spacing::LG};",
                            "Create Your First Event"
                        }
                    }
                }
            } else {
                div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: {spacing::XL};",
                    for event in events.iter() {
                        EventCard { key: "{event.id}", event: event.clone(), on_click: on_open }
                    }
                }
            }
        }
    }
}
