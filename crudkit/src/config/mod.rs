//! Crate-level settings
//!
//! Defaults consumed by [`CrudConfig`](crate::controller::CrudConfig):
//! per-page limit, default sort field, and the notice message texts.
//! Loadable from `crudkit.toml` and `CRUDKIT_`-prefixed environment variables
//! with clear precedence:
//!
//! 1. Environment variables (highest priority)
//! 2. `./crudkit.toml`
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # crudkit.toml
//! default_limit = 25
//! default_sort = "updated"
//!
//! [notices]
//! success = "Saved."
//! failure = "Could not save."
//! not_found = "No such record."
//! ```

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Notice message texts surfaced to end users.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeText {
    /// Queued after a successful create, update or delete.
    pub success: String,
    /// Queued after a failed validation.
    pub failure: String,
    /// Queued when a record cannot be found.
    pub not_found: String,
}

impl Default for NoticeText {
    fn default() -> Self {
        Self {
            success: "Operation completed successfully.".into(),
            failure: "Operation failed.".into(),
            not_found: "Record not found.".into(),
        }
    }
}

/// Settings shared by every controller built from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrudSettings {
    /// Records per page when the request does not say otherwise.
    pub default_limit: u64,
    /// Sort field applied (descending) when the request names none.
    pub default_sort: String,
    /// Notice message texts.
    pub notices: NoticeText,
}

impl Default for CrudSettings {
    fn default() -> Self {
        Self {
            default_limit: 10,
            default_sort: "created".into(),
            notices: NoticeText::default(),
        }
    }
}

impl CrudSettings {
    /// Load settings from `./crudkit.toml` and the environment.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use crudkit::config::CrudSettings;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let settings = CrudSettings::load()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from("crudkit.toml")
    }

    /// Load settings from a specific TOML file and the environment.
    ///
    /// A missing file is not an error; defaults and environment variables
    /// still apply.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let settings = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("CRUDKIT_").split("__"))
            .extract()?;
        Ok(settings)
    }
}
