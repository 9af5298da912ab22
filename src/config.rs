//! Configuration management for bpmlist.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Every value has a default, so a fresh
//! install works without any configuration.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Built-in defaults

use std::{env, path::PathBuf};

/// Upper bound on tracks per playlist unless `BPMLIST_MAX_PLAYLIST_TRACKS`
/// says otherwise. The metadata API resolves at most 50 track ids per request.
pub const DEFAULT_MAX_PLAYLIST_TRACKS: usize = 50;

/// Acting user when `BPMLIST_USER_ID` is not set.
pub const DEFAULT_USER_ID: &str = "local";

/// Loads environment variables from `.env` in the bpmlist data directory.
///
/// Creates the data directory if needed. A missing `.env` file is not an
/// error; variables already present in the environment are never
/// overwritten.
///
/// The file is looked up in:
/// - Linux: `~/.local/share/bpmlist/.env`
/// - macOS: `~/Library/Application Support/bpmlist/.env`
/// - Windows: `%LOCALAPPDATA%/bpmlist/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = default_data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the directory holding the playlist and track caches.
///
/// `BPMLIST_DATA_DIR` overrides the platform default.
pub fn data_dir() -> PathBuf {
    parse_data_dir(env::var("BPMLIST_DATA_DIR").ok())
}

/// Returns the id of the user on whose behalf playlists are managed.
pub fn user_id() -> String {
    parse_user_id(env::var("BPMLIST_USER_ID").ok())
}

/// Returns the maximum number of tracks a playlist may hold.
///
/// Unparsable or zero values fall back to [`DEFAULT_MAX_PLAYLIST_TRACKS`].
pub fn max_playlist_tracks() -> usize {
    parse_max_playlist_tracks(env::var("BPMLIST_MAX_PLAYLIST_TRACKS").ok())
}

/// Returns the `tracing` filter directive, `warn` unless `BPMLIST_LOG` is set.
pub fn log_filter() -> String {
    parse_log_filter(env::var("BPMLIST_LOG").ok())
}

fn parse_data_dir(value: Option<String>) -> PathBuf {
    match value {
        Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => default_data_dir(),
    }
}

fn parse_user_id(value: Option<String>) -> String {
    value
        .map(|uid| uid.trim().to_string())
        .filter(|uid| !uid.is_empty())
        .unwrap_or_else(|| DEFAULT_USER_ID.to_string())
}

fn parse_max_playlist_tracks(value: Option<String>) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|max| *max > 0)
        .unwrap_or(DEFAULT_MAX_PLAYLIST_TRACKS)
}

fn parse_log_filter(value: Option<String>) -> String {
    value
        .map(|filter| filter.trim().to_string())
        .filter(|filter| !filter.is_empty())
        .unwrap_or_else(|| "warn".to_string())
}

fn default_data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("bpmlist");
    path
}
