//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use chrono::TimeDelta;
use vnengine_story::{Resolution, Story};

use crate::error::AppError;
use crate::state::DEFAULT_IDLE_SECS;

/// Start-up settings for the play server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// YAML story manifest (`STORY_PATH`, required).
    pub story_path: PathBuf,
    /// Directory asset references resolve against (`ASSET_ROOT`, default:
    /// the manifest's directory).
    pub asset_root: PathBuf,
    /// Directory holding save slots (`SAVE_DIR`, default `saves`).
    pub save_dir: PathBuf,
    /// Bind host (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Bind port (`PORT`, default `3000`).
    pub port: u16,
    /// Sessions idle this long are closed (`SESSION_IDLE_SECS`, default
    /// 1800).
    pub idle_timeout: TimeDelta,
    /// Replaces the manifest's languages (`LANGUAGES`, comma separated).
    pub languages: Option<Vec<String>>,
    /// Replaces the manifest's initial language (`INITIAL_LANGUAGE`).
    pub initial_language: Option<String>,
    /// Replaces the manifest's resolution (`RESOLUTION`).
    pub resolution: Option<Resolution>,
}

impl ServerConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `STORY_PATH` is unset or a value does
    /// not parse.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `STORY_PATH` is unset or a value does
    /// not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let story_path = lookup("STORY_PATH")
            .map(PathBuf::from)
            .ok_or_else(|| AppError::Config("STORY_PATH environment variable must be set".into()))?;
        let asset_root = lookup("ASSET_ROOT")
            .map_or_else(|| manifest_dir(&story_path), PathBuf::from);
        let save_dir = PathBuf::from(lookup("SAVE_DIR").unwrap_or_else(|| "saves".to_string()));
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
        let idle_secs = match lookup("SESSION_IDLE_SECS") {
            Some(value) => value
                .parse::<u32>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(i64::from)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "SESSION_IDLE_SECS must be a positive number of seconds, got {value:?}"
                    ))
                })?,
            None => DEFAULT_IDLE_SECS,
        };

        let languages = lookup("LANGUAGES").map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_owned)
                .collect()
        });
        let initial_language = lookup("INITIAL_LANGUAGE");
        let resolution = lookup("RESOLUTION")
            .map(|value| value.parse::<Resolution>())
            .transpose()
            .map_err(|e| AppError::Config(format!("RESOLUTION: {e}")))?;

        Ok(Self {
            story_path,
            asset_root,
            save_dir,
            host,
            port,
            idle_timeout: TimeDelta::seconds(idle_secs),
            languages,
            initial_language,
            resolution,
        })
    }

    /// The socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if host and port do not form an address.
    pub fn addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// Applies the language and resolution overrides to `story`.
    pub fn apply_overrides(&self, story: &mut Story) {
        if let Some(languages) = &self.languages {
            story.set_languages(languages.iter().cloned());
        }
        if let Some(language) = &self.initial_language {
            story.set_initial_language(language.clone());
        }
        if let Some(resolution) = self.resolution {
            story.set_resolution(resolution);
        }
    }
}

fn manifest_dir(story_path: &Path) -> PathBuf {
    story_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
