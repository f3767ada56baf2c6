use aether_client_core::Action;
use dioxus::prelude::*;
use crate::theme::{button_style, spacing, AppColors};

#[component]
pub fn Header(on_navigate: EventHandler<Action>) -> Element {
    let wordmark = AppColors::brand_gradient();
    let create_style = button_style(AppColors::BRAND_BLUE, false);

    rsx! {
        header {
            style: "position: sticky; top: 0; z-index: 50; background: rgba(17,24,39,0.8); backdrop-filter: blur(4px); border-bottom: 1px solid {AppColors::INPUT};",
            nav {
                style: "max-width: {spacing::CONTENT_WIDTH}; margin: 0 auto; padding: 0 {spacing::LG}; height: 64px; display: flex; align-items: center; justify-content: space-between;",
                button {
                    onclick: move |_| on_navigate.call(Action::Home),
                    style: "background: none; border: none; cursor: pointer; padding: 0;",
                    span {
                        style: "font-size: 1.5rem; font-weight: 700; background: {wordmark}; -webkit-background-clip: text; background-clip: text; color: transparent;",
                        "Aether Events"
                    }
                }
                button {
                    onclick: move |_| on_navigate.call(Action::OpenCreate),
                    style: "{create_style}",
                    "Create Event"
                }
            }
        }
    }
}
