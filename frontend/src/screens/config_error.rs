use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};
use crate::widgets::Panel;

/// Shown instead of the app when the generation client cannot be configured.
#[component]
pub fn ConfigErrorScreen(message: String) -> Element {
    rsx! {
        div { style: "max-width: 560px; margin: 96px auto; padding: 0 {spacing::LG};",
            Panel {
                h1 { style: "color: {AppColors::ON_SURFACE}; margin-top: 0;", "Aether Events cannot start" }
                p { style: "color: {AppColors::ERROR_TEXT};", "{message}" }
                p { style: "color: {AppColors::MUTED}; font-size: 0.9rem;",
                    "Set API_KEY (or GEMINI_API_KEY) to a Gemini API key and rebuild."
                }
            }
        }
    }
}
