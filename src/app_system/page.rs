use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::api::UserApi;
use crate::clients::ProfileWidgetClient;
use crate::config::WidgetConfig;
use crate::domain::UserId;
use crate::widget::{ProfileWidget, UpdateCallback};

/// A mounted profile widget.
///
/// Owns the actor task. Hand `widget` (or clones of it) to whatever delivers
/// input events and draws the view.
pub struct ProfilePage {
    pub widget: ProfileWidgetClient,
    handle: JoinHandle<()>,
}

impl ProfilePage {
    /// Spawns the widget for `user_id`; the first load starts immediately.
    pub fn mount(
        api: Arc<dyn UserApi>,
        user_id: impl Into<UserId>,
        on_update: Option<UpdateCallback>,
        config: &WidgetConfig,
    ) -> Self {
        let user_id = user_id.into();
        info!(user_id = %user_id, "Mounting profile widget");

        let (widget, client) = ProfileWidget::new(api, user_id, on_update, config);
        let handle = tokio::spawn(widget.run());

        Self {
            widget: client,
            handle,
        }
    }

    /// Stops the widget and waits for its task. Requests still in flight are
    /// not cancelled; their responses are dropped when they arrive.
    pub async fn unmount(self) -> Result<(), String> {
        info!("Unmounting profile widget");
        self.widget.shutdown().await.map_err(|e| e.to_string())?;
        drop(self.widget);

        if let Err(e) = self.handle.await {
            error!("Widget task failed: {:?}", e);
            return Err(format!("Widget task failed: {:?}", e));
        }

        info!("Profile widget unmounted");
        Ok(())
    }
}
