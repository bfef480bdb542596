//! Application config: input cap, style menu, session lifetime, admins, broadcast pacing, keep-alive port.

use anyhow::Result;
use decoration::{parse_menu, StyleId, UnknownStyle, DEFAULT_MENU, MAX_MENU_LEN};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// MAX_INPUT_CHARS
    pub max_input_chars: usize,
    /// STYLE_MENU, comma-separated style ids; None means the built-in menu
    pub style_menu: Option<String>,
    /// SESSION_TTL_SECS
    pub session_ttl_secs: u64,
    /// ADMIN_IDS, comma-separated Telegram user ids
    pub admin_ids: Vec<i64>,
    /// BROADCAST_DELAY_MS, pause between two broadcast sends
    pub broadcast_delay_ms: u64,
    /// KEEPALIVE_PORT or PORT
    pub keepalive_port: Option<u16>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 60,
            style_menu: None,
            session_ttl_secs: 3600,
            admin_ids: Vec::new(),
            broadcast_delay_ms: 50,
            keepalive_port: None,
        }
    }
}

/// Longest session lifetime a `chrono::Duration` can hold in whole seconds.
pub const MAX_SESSION_TTL_SECS: u64 = i64::MAX as u64 / 1000;

/// Reads an optional numeric variable. Set but unparsable is an error, not the default.
fn env_number<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(s) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| anyhow::anyhow!("{} must be a number, got: {}", name, s)),
        Err(_) => Ok(None),
    }
}

fn parse_admin_ids(list: &str) -> Result<Vec<i64>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse()
                .map_err(|_| anyhow::anyhow!("ADMIN_IDS contains a non-numeric id: {}", s))
        })
        .collect()
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let admin_ids = match env::var("ADMIN_IDS") {
            Ok(list) => parse_admin_ids(&list)?,
            Err(_) => Vec::new(),
        };

        let keepalive_port = match env_number("KEEPALIVE_PORT")? {
            Some(port) => Some(port),
            None => env_number("PORT")?,
        };

        Ok(Self {
            max_input_chars: env_number("MAX_INPUT_CHARS")?.unwrap_or(defaults.max_input_chars),
            style_menu: env::var("STYLE_MENU").ok(),
            session_ttl_secs: env_number("SESSION_TTL_SECS")?
                .unwrap_or(defaults.session_ttl_secs),
            admin_ids,
            broadcast_delay_ms: env_number("BROADCAST_DELAY_MS")?
                .unwrap_or(defaults.broadcast_delay_ms),
            keepalive_port,
        })
    }

    /// Styles offered in the menu, in button order.
    pub fn style_menu(&self) -> Result<Vec<StyleId>, UnknownStyle> {
        match &self.style_menu {
            Some(list) => parse_menu(list),
            None => Ok(DEFAULT_MENU.to_vec()),
        }
    }

    /// Clamped to [`MAX_SESSION_TTL_SECS`]; `validate` rejects anything above it.
    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.session_ttl_secs.min(MAX_SESSION_TTL_SECS) as i64)
    }

    pub fn broadcast_delay(&self) -> Duration {
        Duration::from_millis(self.broadcast_delay_ms)
    }

    pub fn is_admin(&self, user_id: i64) -> bool {
        self.admin_ids.contains(&user_id)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_input_chars == 0 {
            anyhow::bail!("MAX_INPUT_CHARS must be greater than 0");
        }
        if !(1..=MAX_SESSION_TTL_SECS).contains(&self.session_ttl_secs) {
            anyhow::bail!(
                "SESSION_TTL_SECS must be between 1 and {}, got {}",
                MAX_SESSION_TTL_SECS,
                self.session_ttl_secs
            );
        }
        let menu = self
            .style_menu()
            .map_err(|e| anyhow::anyhow!("STYLE_MENU is invalid: {}", e))?;
        if menu.is_empty() {
            anyhow::bail!("STYLE_MENU must name at least one style");
        }
        if menu.len() > MAX_MENU_LEN {
            anyhow::bail!(
                "STYLE_MENU has {} styles, at most {} are allowed",
                menu.len(),
                MAX_MENU_LEN
            );
        }
        Ok(())
    }
}
