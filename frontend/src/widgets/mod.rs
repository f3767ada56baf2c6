mod event_card;
mod header;
mod loading_spinner;
mod panel;

pub use event_card::EventCard;
pub use header::Header;
pub use loading_spinner::LoadingSpinner;
pub use panel::Panel;
