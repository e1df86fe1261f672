// src/config.rs

//! Defines the configuration structure for document decoding.
//!
//! Serde derives are provided so a viewer can deserialize this from its own
//! configuration file (TOML, JSON, ...). Default values match the classic
//! 80x24 screen most BBS-era documents assume.

use serde::{Deserialize, Serialize};

/// Decoding configuration for a [`Document`](crate::Document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wrap column count. Writing at this column wraps the cursor to the
    /// start of the next row first, reproducing legacy terminal autowrap.
    /// `0` disables wrapping entirely; rows grow without bound.
    pub screen_width: u16,
    /// Advisory line-count hint (e.g. from SAUCE metadata). It never clamps
    /// or truncates the grid; growth always wins. Kept for a future
    /// scroll-region feature and for callers sizing their viewport.
    pub screen_lines: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            screen_width: 80,
            screen_lines: 24,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_screen() {
        let config = Config::default();
        assert_eq!(config.screen_width, 80);
        assert_eq!(config.screen_lines, 24);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"screen_width": 132}"#).unwrap();
        assert_eq!(config.screen_width, 132);
        assert_eq!(config.screen_lines, 24);
    }

    #[test]
    fn round_trips_through_json() {
        let config = Config {
            screen_width: 0,
            screen_lines: 50,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), config);
    }
}
