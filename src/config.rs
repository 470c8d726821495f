use crate::domain::LoadOrdering;

/// Base address used when nothing was supplied at build time.
pub const DEFAULT_API_BASE: &str = "https://api.example.com";

/// Widget settings. The API base is fixed when the crate is compiled
/// (`PROFILE_API_BASE`); nothing here is read from the environment at runtime.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub api_base: String,
    pub load_ordering: LoadOrdering,
    pub mailbox_size: usize,
}

impl WidgetConfig {
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: normalize_base(api_base.into()),
            ..Self::default()
        }
    }

    pub fn load_ordering(mut self, ordering: LoadOrdering) -> Self {
        self.load_ordering = ordering;
        self
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        let base = option_env!("PROFILE_API_BASE").unwrap_or(DEFAULT_API_BASE);
        Self {
            api_base: normalize_base(base.to_string()),
            load_ordering: LoadOrdering::default(),
            mailbox_size: 32,
        }
    }
}

fn normalize_base(base: String) -> String {
    base.trim_end_matches('/').to_string()
}
