/// Where the current load cycle stands.
///
/// Never stored directly: [`WidgetState::status`](crate::widget::WidgetState::status)
/// derives it from the loading flag and the captured error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    Error(String),
    Ready,
}

impl LoadStatus {
    pub fn from_parts(loading: bool, error: Option<&str>) -> Self {
        if loading {
            LoadStatus::Pending
        } else if let Some(message) = error {
            LoadStatus::Error(message.to_string())
        } else {
            LoadStatus::Ready
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadStatus::Ready)
    }
}

/// What to do with a load response that belongs to an older generation than
/// the most recently issued one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadOrdering {
    /// Apply every response as it arrives; the last one to resolve wins.
    #[default]
    LastResolvedWins,
    /// Drop responses for anything but the latest request.
    LatestRequestWins,
}
