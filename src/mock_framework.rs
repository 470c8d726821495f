//! # Mock Framework
//!
//! Utilities for testing the widget without a users service.
//!
//! Use [`create_mock_api`] to get a [`UserApi`] and a receiver. Every call the
//! widget makes arrives on the receiver together with its responder, so a test
//! decides when, how, and in what order requests resolve. Helpers like
//! [`expect_fetch`] and [`expect_update`] pull the next call off the channel.
//!
//! [`LogCapture`] records tracing events so tests can assert on log output.

use std::fmt;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::api::UserApi;
use crate::domain::{UserId, UserRecord};
use crate::error::ApiError;

/// A request the widget made, waiting for the test to answer it.
#[derive(Debug)]
pub enum ApiCall {
    Fetch {
        user_id: UserId,
        respond_to: oneshot::Sender<Result<UserRecord, ApiError>>,
    },
    Update {
        user_id: UserId,
        body: Value,
        respond_to: oneshot::Sender<Result<Value, ApiError>>,
    },
}

pub struct MockUserApi {
    sender: mpsc::Sender<ApiCall>,
}

#[async_trait]
impl UserApi for MockUserApi {
    async fn fetch_user(&self, user_id: &UserId) -> Result<UserRecord, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ApiCall::Fetch {
                user_id: user_id.clone(),
                respond_to,
            })
            .await
            .map_err(|_| ApiError::Transport("Mock closed".to_string()))?;
        response
            .await
            .map_err(|_| ApiError::Transport("Mock dropped".to_string()))?
    }

    async fn update_user(&self, user_id: &UserId, draft: &UserRecord) -> Result<Value, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ApiCall::Update {
                user_id: user_id.clone(),
                body: serde_json::to_value(draft)?,
                respond_to,
            })
            .await
            .map_err(|_| ApiError::Transport("Mock closed".to_string()))?;
        response
            .await
            .map_err(|_| ApiError::Transport("Mock dropped".to_string()))?
    }
}

/// Creates a mock API and the receiver its calls arrive on.
pub fn create_mock_api(buffer_size: usize) -> (Arc<MockUserApi>, mpsc::Receiver<ApiCall>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (Arc::new(MockUserApi { sender }), receiver)
}

/// Helper to verify that the next call is a fetch
pub async fn expect_fetch(
    receiver: &mut mpsc::Receiver<ApiCall>,
) -> Option<(UserId, oneshot::Sender<Result<UserRecord, ApiError>>)> {
    match receiver.recv().await {
        Some(ApiCall::Fetch { user_id, respond_to }) => Some((user_id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next call is an update
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<ApiCall>,
) -> Option<(UserId, Value, oneshot::Sender<Result<Value, ApiError>>)> {
    match receiver.recv().await {
        Some(ApiCall::Update {
            user_id,
            body,
            respond_to,
        }) => Some((user_id, body, respond_to)),
        _ => None,
    }
}

/// One recorded tracing event.
#[derive(Debug, Clone)]
pub struct CapturedLog {
    pub level: Level,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

/// `tracing-subscriber` layer that keeps every event in memory.
///
/// [`install`](Self::install) sets it as the thread's default subscriber;
/// with the current-thread runtime `#[tokio::test]` uses, spawned tasks log
/// into it too.
#[derive(Clone, Default)]
pub struct LogCapture {
    records: Arc<Mutex<Vec<CapturedLog>>>,
}

impl LogCapture {
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::set_default(subscriber)
    }

    pub fn records(&self) -> Vec<CapturedLog> {
        self.records.lock().unwrap().clone()
    }

    pub fn at_level(&self, level: Level) -> Vec<CapturedLog> {
        self.records()
            .into_iter()
            .filter(|record| record.level == level)
            .collect()
    }

    pub fn contains(&self, message: &str) -> bool {
        self.records().iter().any(|record| record.message == message)
    }
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldCollector::default();
        event.record(&mut visitor);
        self.records.lock().unwrap().push(CapturedLog {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct FieldCollector {
    message: String,
    fields: Vec<(String, String)>,
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields
                .push((field.name().to_string(), format!("{:?}", value)));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push((field.name().to_string(), value.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{error, info};

    #[tokio::test]
    async fn test_mock_api() {
        let (api, mut receiver) = create_mock_api(10);

        let fetch_task = tokio::spawn(async move { api.fetch_user(&UserId::from("user_1")).await });

        let (user_id, responder) = expect_fetch(&mut receiver).await.expect("Expected Fetch call");
        assert_eq!(user_id, UserId::from("user_1"));
        let record = UserRecord::with_profile("Test", "test@example.com", "");
        responder.send(Ok(record.clone())).unwrap();

        let result = fetch_task.await.unwrap();
        assert_eq!(result, Ok(record));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_transport_error() {
        let (api, mut receiver) = create_mock_api(10);

        let update_task = tokio::spawn(async move {
            api.update_user(&UserId::from("user_1"), &UserRecord::new()).await
        });

        let (_, body, responder) = expect_update(&mut receiver).await.expect("Expected Update call");
        assert_eq!(body, serde_json::json!({}));
        drop(responder);

        let result = update_task.await.unwrap();
        assert_eq!(result, Err(ApiError::Transport("Mock dropped".to_string())));
    }

    #[test]
    fn test_log_capture_records_message_and_fields() {
        let logs = LogCapture::default();
        let _guard = logs.install();

        info!("plain");
        error!(error = %"boom", "Update failed");

        let errors = logs.at_level(Level::ERROR);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Update failed");
        assert_eq!(errors[0].fields, vec![("error".to_string(), "boom".to_string())]);
        assert!(logs.contains("plain"));
    }
}
