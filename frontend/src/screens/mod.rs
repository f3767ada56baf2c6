mod config_error;
mod create_event;
mod dashboard;
mod event_detail;

pub use config_error::ConfigErrorScreen;
pub use create_event::CreateEventScreen;
pub use dashboard::DashboardScreen;
pub use event_detail::EventDetailScreen;
