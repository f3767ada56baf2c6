use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

/// Rounded surface that groups a section of a screen.
#[component]
pub fn Panel(children: Element) -> Element {
    rsx! {
        div {
            style: "background: {AppColors::SURFACE}; border-radius: 12px; padding: {spacing::PANEL_PADDING};",
            {children}
        }
    }
}
