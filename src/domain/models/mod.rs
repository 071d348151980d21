pub mod config;
pub mod notification;
pub mod retry_budget;
pub mod section;
pub mod view_state;

pub use config::{ApiConfig, Config, LogFormat, LoggingConfig, RotationPolicy};
pub use notification::{Notification, Severity};
pub use retry_budget::{RetryBudget, POLL_INTERVAL};
pub use section::{Ack, Collection, ErrorPayload, Section};
pub use view_state::ViewState;
