use aether_client_core::format::card_date;
use aether_client_core::{Event, EventId};
use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn EventCard(event: Event, on_click: EventHandler<EventId>) -> Element {
    let date = card_date(&event.date);
    let banner = event.image.src();
    let id = event.id.clone();

    rsx! {
        div {
            onclick: move |_| on_click.call(id.clone()),
            style: "background: {AppColors::SURFACE}; border-radius: 12px; overflow: hidden; cursor: pointer; box-shadow: 0 10px 15px rgba(0,0,0,0.3);",
            div { style: "position: relative;",
                img {
                    src: "{banner}",
                    alt: "{event.title}",
                    style: "display: block; width: 100%; height: 224px; object-fit: cover;",
                }
                div {
                    style: "position: absolute; inset: 0; background: linear-gradient(to top, rgba(0,0,0,0.8), transparent);",
                }
                h3 {
                    style: "position: absolute; bottom: 0; left: 0; margin: 0; padding: {spacing::MD}; color: {AppColors::ON_SURFACE}; font-size: 1.25rem;",
                    "{event.title}"
                }
            }
            div { style: "padding: {spacing::MD}; color: {AppColors::MUTED}; font-size: 0.875rem;",
                p { style: "margin: 0 0 {spacing::SM};", "📅 {date}" }
                p { style: "margin: 0;", "📍 {event.location}" }
            }
        }
    }
}
