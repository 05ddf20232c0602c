// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub api: ApiOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            api: ApiOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

impl AppOptions {
    /// Defaults, overridden by `ECOURTS_API_URL`, `ECOURTS_OUT_DIR` and
    /// `ECOURTS_TIMEOUT_SECS` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    /// Unparsable or blank values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(url) = lookup(API_URL_ENV) {
            opts.api.set_base_url(&url);
        }
        if let Some(dir) = lookup(OUT_DIR_ENV) {
            opts.export.set_dir(&dir);
        }
        if let Some(secs) = lookup(TIMEOUT_ENV) {
            match secs.trim().parse::<u64>() {
                Ok(0) => opts.api.timeout = None,
                Ok(n) => opts.api.timeout = Some(Duration::from_secs(n)),
                Err(_) => logw!("Config: ignoring {}={:?}", TIMEOUT_ENV, secs),
            }
        }
        opts
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    base_url: String,
    /// None = wait forever
    pub timeout: Option<Duration>,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self {
            base_url: s!(DEFAULT_API_BASE),
            timeout: None,
        }
    }
}

impl ApiOptions {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Trailing slashes are dropped so endpoint joins stay clean.
    pub fn set_base_url(&mut self, text: &str) {
        let s = text.trim().trim_end_matches('/');
        if s.is_empty() {
            return;
        }
        self.base_url = s!(s);
    }

    /// `path` starts with `/`, e.g. `/api/health`.
    pub fn endpoint(&self, path: &str) -> String {
        join!(&self.base_url, path)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI text into the output directory. Blank input keeps the current one.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            return;
        }
        self.out_dir = PathBuf::from(s);
    }
}
