//! Create-event form: validation gates, generation merges, submit.

mod common;

use aether_client_core::{CreateEventForm, FormError, ValidationError, PLACEHOLDER_IMAGE_URL};
use common::ScriptedGenerator;
use pretty_assertions::assert_eq;

fn filled_form() -> CreateEventForm {
    let mut form = CreateEventForm::new();
    form.draft.title = "Demo Talk".into();
    form.draft.description = "Intro.".into();
    form.draft.date = "2024-12-01".into();
    form.draft.location = "Hall A".into();
    form
}

#[tokio::test]
async fn description_without_title_makes_no_call() {
    let generator = ScriptedGenerator::describing("never used");
    let mut form = CreateEventForm::new();

    let result = form.generate_description(&generator).await;

    assert!(matches!(result, Err(FormError::Validation(ValidationError::MissingTitle))));
    assert_eq!(generator.description_calls.get(), 0);
    assert_eq!(form.error(), Some("Please enter an event title first."));
    assert!(!form.is_generating_description());
}

#[tokio::test]
async fn image_without_prompt_makes_no_call() {
    let generator = ScriptedGenerator::drawing(b"jpeg");
    let mut form = CreateEventForm::new();
    form.draft.title = "Has a title".into();

    let result = form.generate_image(&generator).await;

    assert!(matches!(result, Err(FormError::Validation(ValidationError::MissingImagePrompt))));
    assert_eq!(generator.image_calls.get(), 0);
    assert_eq!(form.error(), Some("Please enter a prompt for the image."));
}

#[tokio::test]
async fn description_success_sets_trimmed_text_and_clears_error() {
    let generator = ScriptedGenerator::describing("\n  Paragraph one.\n\nParagraph two.  \n");
    let mut form = CreateEventForm::new();
    let _ = form.submit();
    assert!(form.error().is_some());
    form.draft.title = "Demo Talk".into();

    form.generate_description(&generator).await.unwrap();

    assert_eq!(generator.description_calls.get(), 1);
    assert_eq!(generator.last_title.borrow().as_deref(), Some("Demo Talk"));
    assert_eq!(form.draft.description, "Paragraph one.\n\nParagraph two.");
    assert!(form.error().is_none());
    assert!(!form.is_generating_description());
}

#[tokio::test]
async fn description_failure_keeps_text_and_sets_generic_error() {
    let generator = ScriptedGenerator::failing();
    let mut form = CreateEventForm::new();
    form.draft.title = "Demo Talk".into();
    form.draft.description = "Hand written.".into();

    let result = form.generate_description(&generator).await;

    assert!(matches!(result, Err(FormError::Generation(_))));
    assert_eq!(generator.description_calls.get(), 1);
    assert_eq!(form.draft.description, "Hand written.");
    assert_eq!(
        form.error(),
        Some("Failed to generate event description. Please try again.")
    );
    assert!(!form.is_generating_description());
}

#[tokio::test]
async fn image_success_sets_jpeg_data_url() {
    let generator = ScriptedGenerator::drawing(b"\xff\xd8\xff\xe0banner");
    let mut form = CreateEventForm::new();
    form.draft.image_prompt = "neon skyline".into();

    form.generate_image(&generator).await.unwrap();

    assert_eq!(generator.last_prompt.borrow().as_deref(), Some("neon skyline"));
    assert_eq!(form.draft.image.src(), "data:image/jpeg;base64,/9j/4GJhbm5lcg==");
    assert!(!form.is_generating_image());
}

#[tokio::test]
async fn image_failure_keeps_placeholder() {
    let generator = ScriptedGenerator::failing();
    let mut form = CreateEventForm::new();
    form.draft.image_prompt = "anything".into();

    let result = form.generate_image(&generator).await;

    assert!(result.is_err());
    assert_eq!(form.draft.image.src(), PLACEHOLDER_IMAGE_URL);
    assert_eq!(form.error(), Some("Failed to generate event image. Please try again."));
}

#[test]
fn submit_requires_each_field() {
    let clear: [fn(&mut CreateEventForm); 4] = [
        |f| f.draft.title.clear(),
        |f| f.draft.description.clear(),
        |f| f.draft.date.clear(),
        |f| f.draft.location.clear(),
    ];
    for clear_field in clear {
        let mut form = filled_form();
        clear_field(&mut form);

        assert_eq!(form.submit(), Err(ValidationError::MissingRequiredFields));
        assert_eq!(form.error(), Some("Please fill out all required fields."));
    }
}

#[test]
fn submit_emits_event_and_discards_draft() {
    let mut form = filled_form();
    form.draft.image_prompt = "unused prompt".into();

    let new_event = form.submit().unwrap();

    assert_eq!(new_event.title, "Demo Talk");
    assert_eq!(new_event.description, "Intro.");
    assert_eq!(new_event.date, "2024-12-01");
    assert_eq!(new_event.location, "Hall A");
    assert_eq!(new_event.image.src(), PLACEHOLDER_IMAGE_URL);
    assert_eq!(form, CreateEventForm::new());
}

#[test]
fn split_steps_merge_results_from_outside() {
    let mut form = CreateEventForm::new();
    form.draft.title = "Split".into();

    let title = form.begin_description().unwrap();
    assert_eq!(title, "Split");
    assert!(form.is_generating_description());

    form.complete_description(Ok("  Done.  ".to_string()));
    assert_eq!(form.draft.description, "Done.");
    assert!(!form.is_generating_description());
}
