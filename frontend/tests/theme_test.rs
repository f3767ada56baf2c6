//! Theme helpers: inline styles shared by the screens.

use aether_frontend::theme::{button_style, input_style, AppColors};

#[test]
fn disabled_buttons_are_dimmed_and_not_clickable() {
    let enabled = button_style(AppColors::GENERATE_TEXT, false);
    let disabled = button_style(AppColors::GENERATE_TEXT, true);

    assert!(enabled.contains("background: #4F46E5;"));
    assert!(enabled.contains("cursor: pointer;"));
    assert!(disabled.contains("opacity: 0.5;"));
    assert!(disabled.contains("cursor: not-allowed;"));
}

#[test]
fn inputs_use_dark_surface() {
    let style = input_style();
    assert!(style.contains(AppColors::INPUT));
    assert!(style.contains("width: 100%;"));
}

#[test]
fn wordmark_gradient_runs_purple_to_blue() {
    assert_eq!(
        AppColors::brand_gradient(),
        "linear-gradient(to right, #8B5CF6, #3B82F6)"
    );
}
