//! App theme: colors and spacing. The app is dark-only.

#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Brand
    pub const BRAND_BLUE: &'static str = "#3B82F6";
    pub const BRAND_PURPLE: &'static str = "#8B5CF6";

    // Surfaces
    pub const BACKGROUND: &'static str = "#111827";
    pub const SURFACE: &'static str = "#1F2937";
    pub const INPUT: &'static str = "#374151";
    pub const BORDER: &'static str = "#4B5563";

    // Text
    pub const ON_SURFACE: &'static str = "#FFFFFF";
    pub const MUTED: &'static str = "#9CA3AF";
    pub const BODY: &'static str = "#D1D5DB";

    // Actions
    pub const GENERATE_TEXT: &'static str = "#4F46E5";
    pub const GENERATE_IMAGE: &'static str = "#9333EA";
    pub const NEUTRAL_BUTTON: &'static str = "#4B5563";

    // Error banner
    pub const ERROR_BG: &'static str = "#7F1D1D";
    pub const ERROR_BORDER: &'static str = "#B91C1C";
    pub const ERROR_TEXT: &'static str = "#FECACA";

    /// Brand gradient used for the header wordmark.
    pub fn brand_gradient() -> String {
        format!("linear-gradient(to right, {}, {})", Self::BRAND_PURPLE, Self::BRAND_BLUE)
    }
}

/// 8px grid spacing.
pub mod spacing {
    pub const XS: &str = "4px";
    pub const SM: &str = "8px";
    pub const MD: &str = "16px";
    pub const LG: &str = "24px";
    pub const XL: &str = "32px";
    pub const PANEL_PADDING: &str = "32px";
    pub const SCREEN_PADDING: &str = "32px 24px";
    pub const CONTENT_WIDTH: &str = "1200px";
    pub const FORM_WIDTH: &str = "896px";
}

/// Shared inline style of text inputs and text areas.
pub fn input_style() -> String {
    format!(
        "width: 100%; padding: 8px 12px; border-radius: 8px; border: 1px solid {}; background: {}; color: {}; box-sizing: border-box; font: inherit;",
        AppColors::BORDER,
        AppColors::INPUT,
        AppColors::ON_SURFACE,
    )
}

/// Filled button in `bg`; dimmed while `disabled`.
pub fn button_style(bg: &str, disabled: bool) -> String {
    let (opacity, cursor) = if disabled { ("0.5", "not-allowed") } else { ("1", "pointer") };
    format!(
        "display: inline-flex; align-items: center; gap: 8px; padding: 8px 16px; border-radius: 8px; border: none; background: {}; color: white; font-weight: 600; opacity: {}; cursor: {};",
        bg, opacity, cursor
    )
}
