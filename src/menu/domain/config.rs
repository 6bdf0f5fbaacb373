//! Menu session configuration.

use serde::Deserialize;
use std::time::Duration;

/// Configuration for menu sessions.
///
/// Every field has a default, so hosts may load partial objects.
///
/// # Examples
///
/// ```
/// use cog_menus::menu::domain::MenuConfig;
/// use std::time::Duration;
///
/// let config = MenuConfig::default();
/// assert_eq!(config.timeout(), Duration::from_secs(180));
///
/// let short: MenuConfig = serde_json::from_str(r#"{"timeout_secs": 60}"#).expect("valid json");
/// assert_eq!(short.timeout(), Duration::from_secs(60));
/// assert_eq!(short.follow_up_timeout(), Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Absolute session lifetime in seconds, measured from start.
    pub timeout_secs: u64,
    /// Bounded wait for a free-text follow-up reply, in seconds.
    pub follow_up_timeout_secs: u64,
    /// Page shown when the menu opens.
    pub page_start: usize,
    /// Ephemeral notice sent to users who may not drive the menu.
    pub unauthorized_notice: String,
    /// Message rendered when a source has nothing to show and does not
    /// supply its own explanation.
    pub no_content_notice: String,
    /// `minijinja` template for page footers. Receives `page` (one-based)
    /// and `pages` (count, or `?` when unknown).
    pub footer_template: String,
}

impl MenuConfig {
    /// Returns the session lifetime.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the follow-up reply wait.
    #[must_use]
    pub const fn follow_up_timeout(&self) -> Duration {
        Duration::from_secs(self.follow_up_timeout_secs)
    }

    /// Sets the session lifetime.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Sets the follow-up reply wait.
    #[must_use]
    pub const fn with_follow_up_timeout(mut self, timeout: Duration) -> Self {
        self.follow_up_timeout_secs = timeout.as_secs();
        self
    }

    /// Sets the opening page.
    #[must_use]
    pub const fn with_page_start(mut self, page_start: usize) -> Self {
        self.page_start = page_start;
        self
    }

    /// Sets the footer template.
    #[must_use]
    pub fn with_footer_template(mut self, template: impl Into<String>) -> Self {
        self.footer_template = template.into();
        self
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 180,
            follow_up_timeout_secs: 30,
            page_start: 0,
            unauthorized_notice: "You are not authorized to interact with this.".to_owned(),
            no_content_notice: "Nothing could be found.".to_owned(),
            footer_template: "Page {{ page }}/{{ pages }}".to_owned(),
        }
    }
}
