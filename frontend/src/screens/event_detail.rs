use aether_client_core::format::{full_date, paragraphs};
use aether_client_core::Event;
use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn EventDetailScreen(event: Event, on_back: EventHandler<()>) -> Element {
    let date = full_date(&event.date);
    let banner = event.image.src();

    rsx! {
        div { style: "max-width: {spacing::FORM_WIDTH}; margin: 0 auto;",
            button {
                onclick: move |_| on_back.call(()),
                style: "margin-bottom: {spacing::XL}; background: none; border: none; padding: 0; color: {AppColors::BRAND_BLUE}; cursor: pointer; font-size: 1rem;",
                "← Back to all events"
            }
            div { style: "background: {AppColors::SURFACE}; border-radius: 12px; overflow: hidden;",
                img {
                    src: "{banner}",
                    alt: "{event.title}",
                    style: "display: block; width: 100%; height: 384px; object-fit: cover;",
                }
                div { style: "padding: {spacing::PANEL_PADDING};",
                    h1 { style: "font-size: 2.25rem; font-weight: 800; color: {AppColors::ON_SURFACE}; margin: 0 0 {spacing::MD};",
                        "{event.title}"
                    }
                    div { style: "display: flex; flex-wrap: wrap; gap: {spacing::SM} {spacing::LG}; font-size: 1.125rem; color: {AppColors::BODY}; margin-bottom: {spacing::LG};",
                        span { "📅 {date}" }
                        span { "📍 {event.location}" }
                    }
                    div { style: "font-size: 1.125rem; line-height: 1.75; color: {AppColors::BODY};",
                        for (index, paragraph) in paragraphs(&event.description).into_iter().enumerate() {
                            p { key: "{index}", "{paragraph}" }
                        }
                    }
                }
            }
        }
    }
}
