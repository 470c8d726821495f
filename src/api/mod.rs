//! The seam between the widget and the users service.

mod http;

pub use http::HttpUserApi;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{UserId, UserRecord};
use crate::error::ApiError;

/// Read and update one user record.
///
/// The widget only ever talks to the service through this trait, so tests can
/// swap in an implementation whose responses they control.
#[async_trait]
pub trait UserApi: Send + Sync + 'static {
    /// `GET {base}/users/{user_id}`
    async fn fetch_user(&self, user_id: &UserId) -> Result<UserRecord, ApiError>;

    /// `PUT {base}/users/{user_id}` with the whole draft as body. Returns the
    /// response body as sent by the server.
    async fn update_user(&self, user_id: &UserId, draft: &UserRecord) -> Result<Value, ApiError>;
}
