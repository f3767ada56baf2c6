//! Single-level view state machine: list, create, detail(id).

use crate::ids::EventId;
use crate::models::Event;
use crate::store::EventStore;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    List,
    Create,
    Detail(EventId),
}

/// User intents that move between views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Header "Create Event" or the empty-state button.
    OpenCreate,
    /// Click on an event card.
    OpenDetail(EventId),
    Submitted,
    Cancelled,
    Back,
    /// Header brand link.
    Home,
}

impl View {
    /// Pure transition. Actions that do not apply to the current view leave it unchanged.
    pub fn apply(self, action: Action) -> View {
        match (self, action) {
            (_, Action::OpenCreate) => View::Create,
            (_, Action::Home) => View::List,
            (View::List, Action::OpenDetail(id)) => View::Detail(id),
            (View::Create, Action::Submitted | Action::Cancelled) => View::List,
            (View::Detail(_), Action::Back) => View::List,
            (view, _) => view,
        }
    }

    /// Page to render. A detail id that no longer resolves falls back to the list.
    pub fn resolve<'a>(&self, store: &'a EventStore) -> Page<'a> {
        match self {
            View::List => Page::List,
            View::Create => Page::Create,
            View::Detail(id) => match store.get(id) {
                Some(event) => Page::Detail(event),
                None => {
                    tracing::warn!(event_id = %id, "detail view for unknown event, showing list");
                    Page::List
                }
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Page<'a> {
    List,
    Create,
    Detail(&'a Event),
}
