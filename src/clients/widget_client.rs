use tokio::sync::{mpsc, watch};
use tracing::{debug, instrument};

use crate::domain::{ProfileField, UserId, UserRecord};
use crate::error::WidgetError;
use crate::messages::WidgetRequest;
use crate::view::View;
#[cfg(test)]
use crate::widget::WidgetState;

/// Handle to a mounted [`ProfileWidget`](crate::widget::ProfileWidget).
///
/// The page feeds UI events in through the request methods and redraws from
/// [`subscribe`](Self::subscribe).
#[derive(Clone)]
pub struct ProfileWidgetClient {
    sender: mpsc::Sender<WidgetRequest>,
    view: watch::Receiver<View>,
}

impl ProfileWidgetClient {
    pub fn new(sender: mpsc::Sender<WidgetRequest>, view: watch::Receiver<View>) -> Self {
        Self { sender, view }
    }

    /// Receiver that changes every time the widget re-renders.
    pub fn subscribe(&self) -> watch::Receiver<View> {
        self.view.clone()
    }

    /// Last published view, without a round trip to the actor.
    pub fn current_view(&self) -> View {
        self.view.borrow().clone()
    }

    /// Convenience for pages holding a raw input name (`"name"`, `"email"`,
    /// `"bio"`). Unknown names are ignored.
    pub async fn edit_input(&self, input_name: &str, value: impl Into<String>) -> Result<(), WidgetError> {
        match input_name.parse::<ProfileField>() {
            Ok(field) => self.edit_field(field, value.into()).await,
            Err(e) => {
                debug!(error = %e, "Ignoring input event");
                Ok(())
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), WidgetError> {
        debug!("Sending shutdown request");
        self.sender
            .send(WidgetRequest::Shutdown)
            .await
            .map_err(|e| WidgetError::ActorCommunicationError(e.to_string()))?;
        Ok(())
    }
}

client_method!(ProfileWidgetClient => fn set_subject(user_id: UserId) -> u64 as WidgetRequest::SetSubject);
client_method!(ProfileWidgetClient => fn edit_field(field: ProfileField, value: String) -> () as WidgetRequest::EditField);
client_method!(ProfileWidgetClient => fn submit() -> () as WidgetRequest::Submit);
client_method!(ProfileWidgetClient => fn view() -> View as WidgetRequest::GetView);
client_method!(ProfileWidgetClient => fn draft() -> UserRecord as WidgetRequest::GetDraft);

// Test-only method for internal state inspection
#[cfg(test)]
client_method!(ProfileWidgetClient => fn state() -> WidgetState as WidgetRequest::GetState);
