//! Shared test helpers: a scripted generator and form/event builders.

#![allow(dead_code)]

use aether_client_core::error::GenerationKind;
use aether_client_core::{GeneratedImage, GenerationError, Generator, NewEvent, ImageRef};
use std::cell::{Cell, RefCell};

/// Generator that replays canned results and counts calls.
#[derive(Default)]
pub struct ScriptedGenerator {
    pub description: RefCell<Option<Result<String, GenerationError>>>,
    pub image: RefCell<Option<Result<GeneratedImage, GenerationError>>>,
    pub description_calls: Cell<usize>,
    pub image_calls: Cell<usize>,
    pub last_title: RefCell<Option<String>>,
    pub last_prompt: RefCell<Option<String>>,
}

impl ScriptedGenerator {
    pub fn describing(text: &str) -> Self {
        let g = Self::default();
        *g.description.borrow_mut() = Some(Ok(text.to_string()));
        g
    }

    pub fn drawing(bytes: &[u8]) -> Self {
        let g = Self::default();
        *g.image.borrow_mut() = Some(Ok(GeneratedImage { bytes: bytes.to_vec() }));
        g
    }

    pub fn failing() -> Self {
        let g = Self::default();
        *g.description.borrow_mut() = Some(Err(GenerationError::Empty {
            kind: GenerationKind::Description,
        }));
        *g.image.borrow_mut() = Some(Err(GenerationError::Empty { kind: GenerationKind::Image }));
        g
    }
}

impl Generator for ScriptedGenerator {
    async fn generate_description(&self, title: &str) -> Result<String, GenerationError> {
        self.description_calls.set(self.description_calls.get() + 1);
        *self.last_title.borrow_mut() = Some(title.to_string());
        self.description
            .borrow_mut()
            .take()
            .unwrap_or(Err(GenerationError::Empty { kind: GenerationKind::Description }))
    }

    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, GenerationError> {
        self.image_calls.set(self.image_calls.get() + 1);
        *self.last_prompt.borrow_mut() = Some(prompt.to_string());
        self.image
            .borrow_mut()
            .take()
            .unwrap_or(Err(GenerationError::Empty { kind: GenerationKind::Image }))
    }
}

pub fn new_event(title: &str) -> NewEvent {
    NewEvent {
        title: title.to_string(),
        description: format!("About {}.", title),
        date: "2024-12-01".to_string(),
        location: "Hall A".to_string(),
        image: ImageRef::remote("https://picsum.photos/seed/test/1200/800"),
    }
}
