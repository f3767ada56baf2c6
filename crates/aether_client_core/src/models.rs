use crate::ids::EventId;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

pub const JPEG_MIME: &str = "image/jpeg";

/// Banner image of an event: a remote URL or an inline payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageRef {
    Remote { url: String },
    Inline { mime: String, base64: String },
}

impl ImageRef {
    pub fn remote(url: impl Into<String>) -> Self {
        ImageRef::Remote { url: url.into() }
    }

    /// Inline JPEG from raw image bytes.
    pub fn inline_jpeg(bytes: &[u8]) -> Self {
        ImageRef::Inline {
            mime: JPEG_MIME.to_string(),
            base64: STANDARD.encode(bytes),
        }
    }

    /// Value for an `<img src>` attribute.
    pub fn src(&self) -> String {
        match self {
            ImageRef::Remote { url } => url.clone(),
            ImageRef::Inline { mime, base64 } => format!("data:{};base64,{}", mime, base64),
        }
    }
}

/// A committed event. Never mutated once it is in the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    /// ISO-8601 calendar date (`YYYY-MM-DD`), displayed in UTC.
    pub date: String,
    pub location: String,
    pub image: ImageRef,
}

/// Event payload emitted by a successful form submission; the store assigns the id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub image: ImageRef,
}

impl NewEvent {
    pub fn with_id(self, id: EventId) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            location: self.location,
            image: self.image,
        }
    }
}
