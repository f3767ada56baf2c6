use aether_client_core::{CreateEventForm, GenerationClient, Generator, NewEvent};
use dioxus::prelude::*;
use crate::theme::{button_style, input_style, spacing, AppColors};
use crate::widgets::{LoadingSpinner, Panel};

const LABEL_STYLE: &str = "display: block; margin-bottom: 8px; font-size: 0.875rem; font-weight: 500; color: #D1D5DB;";

/// Create-event page. Generation requests run as tasks owned by this
/// component; if the page unmounts first they are dropped with it.
#[component]
pub fn CreateEventScreen(
    client: GenerationClient,
    on_created: EventHandler<NewEvent>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut controller = use_signal(CreateEventForm::new);

    let (draft, error, describing, drawing) = {
        let form = controller.read();
        (
            form.draft.clone(),
            form.error().map(String::from),
            form.is_generating_description(),
            form.is_generating_image(),
        )
    };
    let banner = draft.image.src();
    let input = input_style();
    let describe_client = client.clone();
    let draw_client = client.clone();

    rsx! {
        div { style: "max-width: {spacing::FORM_WIDTH}; margin: 0 auto;",
            h1 { style: "font-size: 2.25rem; font-weight: 700; color: {AppColors::ON_SURFACE}; margin: 0 0 {spacing::XL};",
                "Create a New Event"
            }
            if let Some(ref e) = error {
                div {
                    role: "alert",
                    style: "background: {AppColors::ERROR_BG}; border: 1px solid {AppColors::ERROR_BORDER}; color: {AppColors::ERROR_TEXT}; padding: 12px {spacing::MD}; border-radius: 8px; margin-bottom: {spacing::LG};",
                    "{e}"
                }
            }
            form {
                onsubmit: move |ev: FormEvent| {
                    ev.prevent_default();
                    let submitted = controller.write().submit();
                    if let Ok(new_event) = submitted {
                        on_created.call(new_event);
                    }
                },
                style: "display: flex; flex-direction: column; gap: {spacing::XL};",
                Panel {
                    h2 { style: "font-size: 1.5rem; color: {AppColors::ON_SURFACE}; margin: 0 0 {spacing::LG};", "Event Details" }
                    div { style: "display: flex; flex-direction: column; gap: {spacing::LG};",
                        div {
                            label { r#for: "title", style: LABEL_STYLE, "Event Title" }
                            input {
                                id: "title",
                                r#type: "text",
                                placeholder: "e.g., Annual Tech Summit",
                                value: "{draft.title}",
                                oninput: move |ev| controller.write().draft.title = ev.value(),
                                style: "{input}",
                            }
                        }
                        div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: {spacing::LG};",
                            div {
                                label { r#for: "date", style: LABEL_STYLE, "Date" }
                                input {
                                    id: "date",
                                    r#type: "date",
                                    value: "{draft.date}",
                                    oninput: move |ev| controller.write().draft.date = ev.value(),
                                    style: "{input}",
                                }
                            }
                            div {
                                label { r#for: "location", style: LABEL_STYLE, "Location" }
                                input {
                                    id: "location",
                                    r#type: "text",
                                    placeholder: "e.g., City Conference Center",
                                    value: "{draft.location}",
                                    oninput: move |ev| controller.write().draft.location = ev.value(),
                                    style: "{input}",
                                }
                            }
                        }
                        div {
                            label { r#for: "description", style: LABEL_STYLE, "Description" }
                            textarea {
                                id: "description",
                                rows: "6",
                                placeholder: "Tell us about your event...",
                                value: "{draft.description}",
                                oninput: move |ev| controller.write().draft.description = ev.value(),
                                style: "{input}",
                            }
                            button {
                                r#type: "button",
                                disabled: describing,
                                onclick: move |_| {
                                    let started = controller.write().begin_description();
                                    let Ok(title) = started else {
                                        return;
                                    };
                                    let client = describe_client.clone();
                                    spawn(async move {
                                        let result = client.generate_description(&title).await;
                                        controller.write().complete_description(result);
                                    });
                                },
                                style: "{button_style(AppColors::GENERATE_TEXT, describing)} margin-top: 12px;",
                                if describing { LoadingSpinner {} }
                                if describing { "Generating..." } else { "✨ Generate with AI" }
                            }
                        }
                    }
                }
                Panel {
                    h2 { style: "font-size: 1.5rem; color: {AppColors::ON_SURFACE}; margin: 0 0 {spacing::LG};", "AI Banner Generation" }
                    img {
                        src: "{banner}",
                        alt: "Event Banner",
                        style: "display: block; width: 100%; height: 256px; object-fit: cover; border-radius: 8px; margin-bottom: {spacing::MD}; background: {AppColors::INPUT};",
                    }
                    label { r#for: "imagePrompt", style: LABEL_STYLE, "Image Prompt" }
                    div { style: "display: flex; gap: {spacing::MD};",
                        input {
                            id: "imagePrompt",
                            r#type: "text",
                            placeholder: "e.g., A futuristic city skyline at sunset",
                            value: "{draft.image_prompt}",
                            oninput: move |ev| controller.write().draft.image_prompt = ev.value(),
                            style: "{input} flex: 1;",
                        }
                        button {
                            r#type: "button",
                            disabled: drawing,
                            onclick: move |_| {
                                let started = controller.write().begin_image();
                                let Ok(prompt) = started else {
                                    return;
                                };
                                let client = draw_client.clone();
                                spawn(async move {
                                    let result = client.generate_image(&prompt).await;
                                    controller.write().complete_image(result);
                                });
                            },
                            style: "{button_style(AppColors::GENERATE_IMAGE, drawing)} white-space: nowrap;",
                            if drawing { LoadingSpinner {} }
                            if drawing { "Generating..." } else { "✨ Generate Image" }
                        }
                    }
                }
                div { style: "display: flex; justify-content: flex-end; gap: {spacing::MD}; padding-top: {spacing::MD};",
                    button {
                        r#type: "button",
                        onclick: move |_| {
                            controller.write().cancel();
                            on_cancel.call(());
                        },
                        style: "{button_style(AppColors::NEUTRAL_BUTTON, false)}",
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        style: "{button_style(AppColors::BRAND_BLUE, false)}",
                        "Create Event"
                    }
                }
            }
        }
    }
}
