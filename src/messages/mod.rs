use tokio::sync::oneshot;

use crate::domain::{ProfileField, UserId, UserRecord};
use crate::error::WidgetError;
use crate::view::View;
#[cfg(test)]
use crate::widget::WidgetState;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// UI events and queries delivered to the widget actor. Each variant carries
/// a oneshot channel for the reply.
#[derive(Debug)]
pub enum WidgetRequest {
    /// The embedding page switched to another user. Replies with the
    /// generation of the load it started.
    SetSubject {
        user_id: UserId,
        respond_to: ServiceResponse<u64, WidgetError>,
    },
    EditField {
        field: ProfileField,
        value: String,
        respond_to: ServiceResponse<(), WidgetError>,
    },
    /// Replies once the update request has settled, whatever its outcome.
    Submit {
        respond_to: ServiceResponse<(), WidgetError>,
    },
    GetView {
        respond_to: ServiceResponse<View, WidgetError>,
    },
    GetDraft {
        respond_to: ServiceResponse<UserRecord, WidgetError>,
    },
    Shutdown,
    #[cfg(test)]
    GetState {
        respond_to: ServiceResponse<WidgetState, WidgetError>,
    },
}
