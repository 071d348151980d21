use async_trait::async_trait;

use crate::domain::errors::ApiError;
use crate::domain::models::{Ack, Collection};

/// Port trait for the house section REST service
///
/// Reads are eventually consistent: a successful [`remove`](Self::remove)
/// does not guarantee the next [`list`](Self::list) reflects it.
///
/// Implementations must be `Send + Sync`; the polling task and the
/// convergence waiter share one client and may call it concurrently.
#[async_trait]
pub trait SectionClient: Send + Sync {
    /// `GET /houses/{house_id}/sections`
    async fn list(&self, house_id: &str) -> Result<Collection, ApiError>;

    /// `DELETE /houses/{house_id}/sections/{section_id}`
    async fn remove(&self, house_id: &str, section_id: &str) -> Result<Ack, ApiError>;
}
