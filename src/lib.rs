pub mod catalog;
pub mod format;
pub mod interactive_ratatui;
pub mod logging;
pub mod query;

use std::time::Duration;

pub use catalog::{Catalog, CatalogError, Role};
pub use format::format_role;
pub use interactive_ratatui::RoleFinderApp;
pub use interactive_ratatui::constants::DEFAULT_SEARCH_LATENCY_MS;
pub use interactive_ratatui::domain::models::Theme;
pub use query::{match_roles, role_matches};

/// Options for one interactive session
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub theme: Theme,
    /// Simulated lookup round-trip
    pub latency: Duration,
    /// Pre-filled into the search field; not submitted
    pub initial_query: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            latency: Duration::from_millis(DEFAULT_SEARCH_LATENCY_MS),
            initial_query: None,
        }
    }
}
