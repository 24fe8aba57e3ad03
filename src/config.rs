//! Runtime settings, read from environment variables.
//!
//! | Variable                | Default                 |
//! |-------------------------|-------------------------|
//! | `SLIDECRAFT_AUTHOR`     | `Slidecraft`            |
//! | `SLIDECRAFT_COMPANY`    | `Slidecraft`            |
//! | `SLIDECRAFT_STORE_PATH` | `slidecraft-store.json` |

use std::env;
use std::path::PathBuf;

pub const AUTHOR_VAR: &str = "SLIDECRAFT_AUTHOR";
pub const COMPANY_VAR: &str = "SLIDECRAFT_COMPANY";
pub const STORE_PATH_VAR: &str = "SLIDECRAFT_STORE_PATH";

const DEFAULT_AUTHOR: &str = "Slidecraft";
const DEFAULT_COMPANY: &str = "Slidecraft";
const DEFAULT_STORE_PATH: &str = "slidecraft-store.json";

/// Deck-level metadata stamped into exported slide-deck files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub author: String,
    pub company: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            author: DEFAULT_AUTHOR.to_string(),
            company: DEFAULT_COMPANY.to_string(),
        }
    }
}

/// All runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub export: ExportConfig,
    /// File backing the `"presentations"` key.
    pub store_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            export: ExportConfig::default(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl Settings {
    /// Reads settings from the environment. Unset or blank variables keep their defaults.
    /// Call `dotenvy::dotenv().ok()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Self {
        Settings::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Settings::default();
        let settings = Settings {
            export: ExportConfig {
                author: value(AUTHOR_VAR).unwrap_or(defaults.export.author),
                company: value(COMPANY_VAR).unwrap_or(defaults.export.company),
            },
            store_path: value(STORE_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
        };
        log::debug!("Loaded settings: {:?}", settings);
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn unset_variables_keep_defaults() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn reads_overrides_and_ignores_blank_values() {
        let vars: HashMap<&str, &str> = [
            (AUTHOR_VAR, "Grand Rounds Team"),
            (COMPANY_VAR, "   "),
            (STORE_PATH_VAR, "/tmp/decks.json"),
        ]
        .into_iter()
        .collect();
        let settings = Settings::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(settings.export.author, "Grand Rounds Team");
        assert_eq!(settings.export.company, DEFAULT_COMPANY);
        assert_eq!(settings.store_path, PathBuf::from("/tmp/decks.json"));
    }
}
