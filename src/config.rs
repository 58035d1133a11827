//! Console settings.
//!
//! Hosts can deserialize [`ConsoleConfig`] from their own settings files; missing
//! fields take their defaults. Environment variables override individual fields
//! through [`ConsoleConfig::from_env`].

use serde::{Deserialize, Serialize};

pub const ENV_MOUSE_CAPTURE: &str = "CONSOLE_LIB_MOUSE_CAPTURE";
pub const ENV_ALTERNATE_SCREEN: &str = "CONSOLE_LIB_ALTERNATE_SCREEN";
pub const ENV_HIDE_CURSOR: &str = "CONSOLE_LIB_HIDE_CURSOR";
pub const ENV_TAB_WIDTH: &str = "CONSOLE_LIB_TAB_WIDTH";

const MAX_TAB_WIDTH: u16 = 16;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Report mouse clicks. Disabling it leaves text selection to the terminal.
    pub mouse_capture: bool,
    pub alternate_screen: bool,
    pub hide_cursor: bool,
    /// Column multiple a `\t` advances to when drawing.
    pub tab_width: u16,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            mouse_capture: true,
            alternate_screen: true,
            hide_cursor: true,
            tab_width: 8,
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Applies any recognized override; malformed values are logged and skipped.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let flags = [
            (ENV_MOUSE_CAPTURE, &mut self.mouse_capture),
            (ENV_ALTERNATE_SCREEN, &mut self.alternate_screen),
            (ENV_HIDE_CURSOR, &mut self.hide_cursor),
        ];
        for (key, slot) in flags {
            let Some(value) = lookup(key) else {
                continue;
            };
            match parse_flag(&value) {
                Some(flag) => *slot = flag,
                None => {
                    tracing::warn!(key, value = %value, "ignoring unrecognized flag value")
                }
            }
        }

        if let Some(value) = lookup(ENV_TAB_WIDTH) {
            match value.trim().parse::<u16>() {
                Ok(width) if (1..=MAX_TAB_WIDTH).contains(&width) => self.tab_width = width,
                _ => {
                    tracing::warn!(key = ENV_TAB_WIDTH, value = %value, "ignoring invalid tab width")
                }
            }
        }
    }

    /// Tab width clamped to a usable range.
    pub fn effective_tab_width(&self) -> u16 {
        self.tab_width.clamp(1, MAX_TAB_WIDTH)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
