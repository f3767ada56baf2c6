//! Create-event form controller.
//!
//! Holds the draft, two independent busy flags and the single error line
//! shown above the form. Generation is split into `begin_*` / `complete_*`
//! so the UI can release its borrow of the form across the await point;
//! `generate_*` runs both halves for callers that own the form outright.

use crate::error::{FormError, GenerationError, ValidationError};
use crate::generation::{GeneratedImage, Generator};
use crate::models::{ImageRef, NewEvent};

pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/seed/placeholder/1200/675";

/// Uncommitted field state.
#[derive(Clone, Debug, PartialEq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub image_prompt: String,
    pub image: ImageRef,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date: String::new(),
            location: String::new(),
            image_prompt: String::new(),
            image: ImageRef::remote(PLACEHOLDER_IMAGE_URL),
        }
    }
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateEventForm {
    pub draft: Draft,
    generating_description: bool,
    generating_image: bool,
    error: Option<String>,
}

impl CreateEventForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_generating_description(&self) -> bool {
        self.generating_description
    }

    pub fn is_generating_image(&self) -> bool {
        self.generating_image
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn reject(&mut self, err: ValidationError) -> ValidationError {
        tracing::warn!(error = %err, "create-event form rejected action");
        self.error = Some(err.to_string());
        err
    }

    /// Validates the title and marks description generation busy.
    /// Returns the title to send; on error no call must be made.
    pub fn begin_description(&mut self) -> Result<String, ValidationError> {
        if blank(&self.draft.title) {
            return Err(self.reject(ValidationError::MissingTitle));
        }
        self.error = None;
        self.generating_description = true;
        Ok(self.draft.title.trim().to_string())
    }

    fn finish_description(&mut self, result: Result<String, GenerationError>) -> Result<(), FormError> {
        self.generating_description = false;
        match result {
            Ok(text) => {
                self.draft.description = text.trim().to_string();
                self.error = None;
                Ok(())
            }
            Err(e) => {
                let err = FormError::from(e);
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Merges a finished description request; failures only set the error line.
    pub fn complete_description(&mut self, result: Result<String, GenerationError>) {
        let _ = self.finish_description(result);
    }

    /// Validates the image prompt and marks image generation busy.
    /// Returns the prompt to send; on error no call must be made.
    pub fn begin_image(&mut self) -> Result<String, ValidationError> {
        if blank(&self.draft.image_prompt) {
            return Err(self.reject(ValidationError::MissingImagePrompt));
        }
        self.error = None;
        self.generating_image = true;
        Ok(self.draft.image_prompt.trim().to_string())
    }

    fn finish_image(&mut self, result: Result<GeneratedImage, GenerationError>) -> Result<(), FormError> {
        self.generating_image = false;
        match result {
            Ok(image) => {
                self.draft.image = image.into_image_ref();
                Ok(())
            }
            Err(e) => {
                let err = FormError::from(e);
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Merges a finished image request; failures only set the error line.
    pub fn complete_image(&mut self, result: Result<GeneratedImage, GenerationError>) {
        let _ = self.finish_image(result);
    }

    pub async fn generate_description<G: Generator>(&mut self, generator: &G) -> Result<(), FormError> {
        let title = self.begin_description()?;
        let result = generator.generate_description(&title).await;
        self.finish_description(result)
    }

    pub async fn generate_image<G: Generator>(&mut self, generator: &G) -> Result<(), FormError> {
        let prompt = self.begin_image()?;
        let result = generator.generate_image(&prompt).await;
        self.finish_image(result)
    }

    /// Emits the new event when every required field is filled; the draft is discarded.
    pub fn submit(&mut self) -> Result<NewEvent, ValidationError> {
        let d = &self.draft;
        if blank(&d.title) || blank(&d.description) || blank(&d.date) || blank(&d.location) {
            return Err(self.reject(ValidationError::MissingRequiredFields));
        }
        let draft = std::mem::take(self).draft;
        Ok(NewEvent {
            title: draft.title,
            description: draft.description,
            date: draft.date,
            location: draft.location,
            image: draft.image,
        })
    }

    pub fn cancel(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_starts_with_placeholder_banner() {
        let form = CreateEventForm::new();
        assert_eq!(form.draft.image.src(), PLACEHOLDER_IMAGE_URL);
        assert!(form.error().is_none());
        assert!(!form.is_generating_description());
        assert!(!form.is_generating_image());
    }

    #[test]
    fn triggers_are_independent() {
        let mut form = CreateEventForm::new();
        form.draft.title = "Launch".into();
        form.draft.image_prompt = "rocket".into();
        form.begin_description().unwrap();
        assert!(form.is_generating_description());
        assert!(!form.is_generating_image());
        form.begin_image().unwrap();
        assert!(form.is_generating_image());
        form.complete_image(Ok(GeneratedImage { bytes: vec![1, 2, 3] }));
        assert!(form.is_generating_description());
        assert!(!form.is_generating_image());
    }

    #[test]
    fn valid_trigger_clears_previous_error() {
        let mut form = CreateEventForm::new();
        assert!(form.begin_image().is_err());
        assert_eq!(form.error(), Some("Please enter a prompt for the image."));
        form.draft.title = "x".into();
        form.begin_description().unwrap();
        assert!(form.error().is_none());
    }

    #[test]
    fn whitespace_title_counts_as_missing() {
        let mut form = CreateEventForm::new();
        form.draft.title = "   ".into();
        assert_eq!(form.begin_description(), Err(ValidationError::MissingTitle));
        assert!(!form.is_generating_description());
    }

    #[test]
    fn cancel_discards_everything() {
        let mut form = CreateEventForm::new();
        form.draft.title = "x".into();
        form.draft.image = ImageRef::inline_jpeg(b"img");
        let _ = form.submit();
        form.cancel();
        assert_eq!(form, CreateEventForm::new());
    }
}
