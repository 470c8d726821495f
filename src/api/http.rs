use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use super::UserApi;
use crate::config::WidgetConfig;
use crate::domain::{UserId, UserRecord};
use crate::error::ApiError;

/// [`UserApi`] over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpUserApi {
    client: Client,
    base_url: String,
}

impl HttpUserApi {
    pub fn new(config: &WidgetConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base.clone(),
        }
    }

    /// The id goes into the path as-is.
    fn user_url(&self, user_id: &UserId) -> String {
        format!("{}/users/{}", self.base_url, user_id)
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn fetch_user(&self, user_id: &UserId) -> Result<UserRecord, ApiError> {
        debug!("Sending GET request");
        let response = self
            .client
            .get(self.user_url(user_id))
            .send()
            .await?
            .error_for_status()?;

        let record = response.json::<UserRecord>().await?;
        debug!("User record received");
        Ok(record)
    }

    #[instrument(skip(self, draft), fields(user_id = %user_id))]
    async fn update_user(&self, user_id: &UserId, draft: &UserRecord) -> Result<Value, ApiError> {
        debug!("Sending PUT request");
        let response = self
            .client
            .put(self.user_url(user_id))
            .json(draft)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&body)?)
    }
}
