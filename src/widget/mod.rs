//! The profile widget actor.
//!
//! One task owns [`WidgetState`] and processes UI events one at a time.
//! Network calls run as spawned tasks and report back through a completion
//! channel, so a slow service never blocks input handling. Nothing is ever
//! cancelled: two loads in flight both land, in whatever order they resolve.

mod state;

pub use state::{LoadApplied, WidgetState};

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, info_span, instrument, warn, Instrument};

use crate::api::UserApi;
use crate::clients::ProfileWidgetClient;
use crate::config::WidgetConfig;
use crate::domain::{ProfileField, UserId, UserRecord};
use crate::error::{ApiError, WidgetError};
use crate::messages::{ServiceResponse, WidgetRequest};
use crate::view::View;

/// Called with the server's response body after a successful update.
pub type UpdateCallback = Arc<dyn Fn(Value) + Send + Sync>;

/// Outcomes of spawned network calls, fed back into the run loop.
enum Completion {
    Load {
        generation: u64,
        user_id: UserId,
        result: Result<UserRecord, ApiError>,
    },
    Submit {
        user_id: UserId,
        result: Result<Value, ApiError>,
        respond_to: ServiceResponse<(), WidgetError>,
    },
}

pub struct ProfileWidget {
    receiver: mpsc::Receiver<WidgetRequest>,
    completions: mpsc::UnboundedReceiver<Completion>,
    completion_sender: mpsc::UnboundedSender<Completion>,
    api: Arc<dyn UserApi>,
    on_update: Option<UpdateCallback>,
    state: WidgetState,
    view: watch::Sender<View>,
}

impl ProfileWidget {
    pub fn new(
        api: Arc<dyn UserApi>,
        user_id: UserId,
        on_update: Option<UpdateCallback>,
        config: &WidgetConfig,
    ) -> (Self, ProfileWidgetClient) {
        let (sender, receiver) = mpsc::channel(config.mailbox_size);
        let (completion_sender, completions) = mpsc::unbounded_channel();
        let state = WidgetState::new(user_id, config.load_ordering);
        let (view, view_receiver) = watch::channel(state.view());

        let widget = Self {
            receiver,
            completions,
            completion_sender,
            api,
            on_update,
            state,
            view,
        };
        let client = ProfileWidgetClient::new(sender, view_receiver);
        (widget, client)
    }

    /// Mounts: starts the first load, then serves events until shutdown or
    /// until every client is dropped.
    #[instrument(name = "profile_widget", skip(self))]
    pub async fn run(mut self) {
        info!(user_id = %self.state.user_id(), "ProfileWidget mounted");

        let initial = self.state.user_id().clone();
        self.start_load(initial);

        loop {
            tokio::select! {
                msg = self.receiver.recv() => match msg {
                    Some(WidgetRequest::SetSubject { user_id, respond_to }) => {
                        self.handle_set_subject(user_id, respond_to);
                    }
                    Some(WidgetRequest::EditField { field, value, respond_to }) => {
                        self.handle_edit_field(field, value, respond_to);
                    }
                    Some(WidgetRequest::Submit { respond_to }) => {
                        self.handle_submit(respond_to);
                    }
                    Some(WidgetRequest::GetView { respond_to }) => {
                        let _ = respond_to.send(Ok(self.state.view()));
                    }
                    Some(WidgetRequest::GetDraft { respond_to }) => {
                        let _ = respond_to.send(Ok(self.state.draft().clone()));
                    }
                    #[cfg(test)]
                    Some(WidgetRequest::GetState { respond_to }) => {
                        let _ = respond_to.send(Ok(self.state.clone()));
                    }
                    Some(WidgetRequest::Shutdown) => {
                        info!("ProfileWidget shutting down");
                        break;
                    }
                    None => break,
                },
                Some(completion) = self.completions.recv() => match completion {
                    Completion::Load { generation, user_id, result } => {
                        self.handle_load_finished(generation, user_id, result);
                    }
                    Completion::Submit { user_id, result, respond_to } => {
                        self.handle_submit_finished(user_id, result, respond_to);
                    }
                },
            }
        }

        self.drain_completions();
        info!("ProfileWidget unmounted");
    }

    /// Settles completions that were queued but not processed before shutdown.
    /// Closing first makes later sends fail, so their tasks answer for themselves.
    fn drain_completions(&mut self) {
        self.completions.close();
        while let Ok(completion) = self.completions.try_recv() {
            match completion {
                Completion::Load { generation, .. } => {
                    debug!(generation, "Widget unmounted; dropping load response");
                }
                Completion::Submit { respond_to, .. } => {
                    debug!("Widget unmounted; dropping update response");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }
    }

    fn publish(&self) {
        self.view.send_replace(self.state.view());
    }

    /// Resets to pending and fires the read request in the background.
    fn start_load(&mut self, user_id: UserId) -> u64 {
        let generation = self.state.begin_load(user_id.clone());
        self.publish();

        let api = Arc::clone(&self.api);
        let done = self.completion_sender.clone();
        let span = info_span!("load_user", user_id = %user_id, generation);

        tokio::spawn(
            async move {
                debug!("Fetching user record");
                let result = api.fetch_user(&user_id).await;
                if done
                    .send(Completion::Load { generation, user_id, result })
                    .is_err()
                {
                    debug!("Widget unmounted; dropping load response");
                }
            }
            .instrument(span),
        );

        generation
    }

    #[instrument(fields(user_id = %user_id), skip(self, respond_to))]
    fn handle_set_subject(&mut self, user_id: UserId, respond_to: ServiceResponse<u64, WidgetError>) {
        debug!("Processing set_subject request");
        let generation = self.start_load(user_id);
        let _ = respond_to.send(Ok(generation));
    }

    #[instrument(fields(field = %field), skip(self, value, respond_to))]
    fn handle_edit_field(
        &mut self,
        field: ProfileField,
        value: String,
        respond_to: ServiceResponse<(), WidgetError>,
    ) {
        if self.state.edit(field, value) {
            self.publish();
        } else {
            debug!("Form not shown; ignoring edit");
        }
        let _ = respond_to.send(Ok(()));
    }

    /// Sends the whole draft. The reply is held back until the update settles.
    #[instrument(fields(user_id = %self.state.user_id()), skip(self, respond_to))]
    fn handle_submit(&mut self, respond_to: ServiceResponse<(), WidgetError>) {
        if !self.state.status().is_ready() {
            debug!("Form not shown; ignoring submit");
            let _ = respond_to.send(Ok(()));
            return;
        }

        let api = Arc::clone(&self.api);
        let done = self.completion_sender.clone();
        let user_id = self.state.user_id().clone();
        let draft = self.state.draft().clone();

        tokio::spawn(
            async move {
                debug!("Sending profile update");
                let result = api.update_user(&user_id, &draft).await;
                if let Err(rejected) = done.send(Completion::Submit { user_id, result, respond_to }) {
                    debug!("Widget unmounted; dropping update response");
                    if let Completion::Submit { respond_to, .. } = rejected.0 {
                        let _ = respond_to.send(Ok(()));
                    }
                }
            }
            .in_current_span(),
        );
    }

    #[instrument(fields(user_id = %user_id), skip(self, result))]
    fn handle_load_finished(
        &mut self,
        generation: u64,
        user_id: UserId,
        result: Result<UserRecord, ApiError>,
    ) {
        let result = result.map_err(|e| e.to_string());
        if let Err(message) = &result {
            error!(error = %message, "Failed to load user");
        }

        match self.state.apply_load(generation, result) {
            LoadApplied::Current => debug!("Load cycle finished"),
            LoadApplied::Stale => warn!(
                latest_generation = self.state.latest_generation(),
                "Applying response from a superseded load"
            ),
            LoadApplied::Discarded => {
                debug!(
                    latest_generation = self.state.latest_generation(),
                    "Discarding response from a superseded load"
                );
                return;
            }
        }

        if let Some(name) = self.state.record().display_name() {
            info!(user_name = %name, "User loaded");
        }
        self.publish();
    }

    #[instrument(fields(user_id = %user_id), skip(self, result, respond_to))]
    fn handle_submit_finished(
        &mut self,
        user_id: UserId,
        result: Result<Value, ApiError>,
        respond_to: ServiceResponse<(), WidgetError>,
    ) {
        match result {
            Ok(body) => {
                info!("Profile updated successfully");
                self.state.mark_submitted();
                self.publish();
                if let Some(on_update) = &self.on_update {
                    on_update(body);
                }
            }
            Err(e) => error!(error = %e, "Update failed"),
        }
        let _ = respond_to.send(Ok(()));
    }
}
