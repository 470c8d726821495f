use crate::domain::{LoadOrdering, LoadStatus, ProfileField, UserId, UserRecord};
use crate::view::{ProfileView, View, UNKNOWN_USER};

/// How a load response was taken in by [`WidgetState::apply_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadApplied {
    /// Response to the most recently issued load.
    Current,
    /// Response to an older load, applied anyway (last resolved wins).
    Stale,
    /// Response to an older load, dropped.
    Discarded,
}

/// Everything the widget knows. Plain data with synchronous transitions; the
/// actor owns the only instance and republishes [`WidgetState::view`] after
/// each change.
#[derive(Debug, Clone)]
pub struct WidgetState {
    user_id: UserId,
    record: UserRecord,
    draft: UserRecord,
    loading: bool,
    error: Option<String>,
    success_visible: bool,
    latest_generation: u64,
    ordering: LoadOrdering,
}

impl WidgetState {
    /// Fresh state at mount: empty record and draft, pending.
    pub fn new(user_id: UserId, ordering: LoadOrdering) -> Self {
        Self {
            user_id,
            record: UserRecord::new(),
            draft: UserRecord::new(),
            loading: true,
            error: None,
            success_visible: false,
            latest_generation: 0,
            ordering,
        }
    }

    /// Starts a new load cycle for `user_id` and returns its generation.
    pub fn begin_load(&mut self, user_id: UserId) -> u64 {
        self.user_id = user_id;
        self.loading = true;
        self.error = None;
        self.latest_generation += 1;
        self.latest_generation
    }

    /// Takes in the outcome of load `generation`. Failures only keep the
    /// display message.
    pub fn apply_load(
        &mut self,
        generation: u64,
        result: Result<UserRecord, String>,
    ) -> LoadApplied {
        let applied = if generation >= self.latest_generation {
            LoadApplied::Current
        } else if self.ordering == LoadOrdering::LatestRequestWins {
            return LoadApplied::Discarded;
        } else {
            LoadApplied::Stale
        };

        match result {
            Ok(record) => {
                self.draft = record.clone();
                self.record = record;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
        applied
    }

    /// Overwrites one draft field. Returns false, changing nothing, while the
    /// form is not on screen.
    pub fn edit(&mut self, field: ProfileField, value: impl Into<String>) -> bool {
        if !self.status().is_ready() {
            return false;
        }
        self.draft.set(field, value);
        true
    }

    /// Reveals the success indicator. It stays up for the rest of the
    /// widget's life.
    pub fn mark_submitted(&mut self) {
        self.success_visible = true;
    }

    pub fn status(&self) -> LoadStatus {
        LoadStatus::from_parts(self.loading, self.error.as_deref())
    }

    pub fn view(&self) -> View {
        match self.status() {
            LoadStatus::Pending => View::Loading,
            LoadStatus::Error(message) => View::Error { message },
            LoadStatus::Ready => View::Profile(ProfileView {
                heading: self
                    .record
                    .display_name()
                    .unwrap_or_else(|| UNKNOWN_USER.to_string()),
                name: self.draft.text(ProfileField::Name),
                email: self.draft.text(ProfileField::Email),
                bio: self.draft.text(ProfileField::Bio),
                success_visible: self.success_visible,
                user_id: self.user_id.to_string(),
            }),
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn record(&self) -> &UserRecord {
        &self.record
    }

    pub fn draft(&self) -> &UserRecord {
        &self.draft
    }

    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest_generation
    }
}
