//! In-memory event store, newest first. The only mutation is [`EventStore::add_event`].

use crate::ids::EventId;
use crate::models::{Event, ImageRef, NewEvent};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the demo events shown on first launch.
    pub fn with_sample_events() -> Self {
        let sample = |id: &str, title: &str, description: &str, date: &str, location: &str, seed: &str| Event {
            id: EventId::parse(id).unwrap_or_else(|_| EventId::generate()),
            title: title.to_string(),
            description: description.to_string(),
            date: date.to_string(),
            location: location.to_string(),
            image: ImageRef::remote(format!("https://picsum.photos/seed/{}/1200/800", seed)),
        };
        Self {
            events: vec![
                sample(
                    "1",
                    "Synthwave Nights",
                    "An electrifying night of retro-futuristic music and visuals. Get lost in the neon glow and pulsating beats of the best synthwave artists.",
                    "2024-10-26",
                    "Cyberdome, Neo-Tokyo",
                    "synthwave",
                ),
                sample(
                    "2",
                    "Tech Innovators Summit",
                    "Join industry leaders and visionaries to discuss the future of technology. A day of insightful talks, networking, and groundbreaking demos.",
                    "2024-11-15",
                    "Silicon Valley Convention Center",
                    "tech",
                ),
                sample(
                    "3",
                    "Artisan Coffee Workshop",
                    "Discover the art of coffee making from bean to cup. A hands-on workshop for enthusiasts and aspiring baristas alike. Taste some of the world's finest single-origin coffees.",
                    "2024-09-30",
                    "The Daily Grind, Seattle",
                    "coffee",
                ),
            ],
        }
    }

    /// Assigns a fresh id and prepends. Returns the stored event.
    pub fn add_event(&mut self, new_event: NewEvent) -> &Event {
        let mut id = EventId::generate();
        while self.contains(&id) {
            id = EventId::generate();
        }
        tracing::info!(event_id = %id, title = %new_event.title, "event created");
        self.events.insert(0, new_event.with_id(id));
        &self.events[0]
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.get(id).is_some()
    }

    /// Newest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
