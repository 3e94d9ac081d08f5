//! Settings loader
//!
//! Loads application settings from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If `LEAVEBRIDGE_CALENDAR_PROVIDER` is set, loads from environment variables
//! 2. Otherwise falls back to loading from file
//! 3. Probes multiple paths for settings files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `LEAVEBRIDGE_CALENDAR_PROVIDER`: `noop`, `exchange` or `google` (required)
//! - `LEAVEBRIDGE_EXCHANGE_EMAIL`: Exchange account address
//! - `LEAVEBRIDGE_EXCHANGE_PASSWORD`: Exchange account password
//! - `LEAVEBRIDGE_EXCHANGE_CALENDAR`: Name of the target calendar
//! - `LEAVEBRIDGE_EXCHANGE_TIMEZONE`: Timezone used for created entries
//! - `LEAVEBRIDGE_EXCHANGE_SEND_INVITATION`: Invite the absent person (true/false)
//! - `LEAVEBRIDGE_GOOGLE_CLIENT_ID`: OAuth client id
//! - `LEAVEBRIDGE_GOOGLE_CLIENT_SECRET`: OAuth client secret
//! - `LEAVEBRIDGE_GOOGLE_CALENDAR_ID`: Target calendar id
//! - `LEAVEBRIDGE_GOOGLE_REFRESH_TOKEN`: OAuth refresh token
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./leavebridge.toml` or `./leavebridge.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names in the parent and grandparent directory
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use leavebridge_domain::{
    CalendarProviderKind, CalendarSettings, ExchangeCalendarSettings, GoogleCalendarSettings,
    LeaveBridgeError, Result, Settings,
};

const PROVIDER_VAR: &str = "LEAVEBRIDGE_CALENDAR_PROVIDER";
const FILE_NAMES: [&str; 4] = ["leavebridge.toml", "leavebridge.json", "config.toml", "config.json"];
const SEARCH_DIRS: [&str; 3] = [".", "..", "../.."];

/// Load settings with automatic fallback strategy
///
/// Environment variables win whenever the provider variable is present.
/// Only a missing provider variable falls back to a settings file; a value
/// that does not parse is an error, never a silent fallback.
///
/// # Errors
/// Returns `LeaveBridgeError::Config` if:
/// - The provider variable is set but invalid
/// - The provider variable is missing and no settings file is found
/// - File format is invalid
pub fn load() -> Result<Settings> {
    if matches!(std::env::var(PROVIDER_VAR), Err(std::env::VarError::NotPresent)) {
        tracing::debug!(var = PROVIDER_VAR, "Provider variable not set, trying file");
        return load_from_file(None);
    }

    let settings = load_from_env()?;
    tracing::info!("Settings loaded from environment variables");
    Ok(settings)
}

/// Load settings from environment variables
///
/// Only `LEAVEBRIDGE_CALENDAR_PROVIDER` is required; every other variable
/// falls back to the settings default.
///
/// # Errors
/// Returns `LeaveBridgeError::Config` if the provider variable is missing or
/// names an unknown provider.
pub fn load_from_env() -> Result<Settings> {
    let provider = env_var(PROVIDER_VAR)?
        .parse::<CalendarProviderKind>()
        .map_err(LeaveBridgeError::Config)?;

    let exchange_defaults = ExchangeCalendarSettings::default();
    let exchange = ExchangeCalendarSettings {
        email: env_opt("LEAVEBRIDGE_EXCHANGE_EMAIL"),
        password: env_opt("LEAVEBRIDGE_EXCHANGE_PASSWORD"),
        calendar: env_opt("LEAVEBRIDGE_EXCHANGE_CALENDAR").unwrap_or(exchange_defaults.calendar),
        timezone: env_opt("LEAVEBRIDGE_EXCHANGE_TIMEZONE").unwrap_or(exchange_defaults.timezone),
        send_invitation_active: env_bool(
            "LEAVEBRIDGE_EXCHANGE_SEND_INVITATION",
            exchange_defaults.send_invitation_active,
        ),
    };

    let google = GoogleCalendarSettings {
        client_id: env_opt("LEAVEBRIDGE_GOOGLE_CLIENT_ID"),
        client_secret: env_opt("LEAVEBRIDGE_GOOGLE_CLIENT_SECRET"),
        calendar_id: env_opt("LEAVEBRIDGE_GOOGLE_CALENDAR_ID"),
        refresh_token: env_opt("LEAVEBRIDGE_GOOGLE_REFRESH_TOKEN"),
    };

    Ok(Settings { calendar: CalendarSettings { provider, exchange, google } })
}

/// Load settings from a file
///
/// If `path` is `None`, probes multiple locations for settings files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `LeaveBridgeError::Config` if:
/// - File not found (when path is specified)
/// - No settings file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Settings> {
    let settings_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(LeaveBridgeError::Config(format!(
                    "Settings file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            LeaveBridgeError::Config(
                "No settings file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %settings_path.display(), "Loading settings from file");

    let contents = std::fs::read_to_string(&settings_path)
        .map_err(|e| LeaveBridgeError::Config(format!("Failed to read settings file: {e}")))?;

    parse_settings(&contents, &settings_path)
}

/// Parse settings from string content, format detected by extension
fn parse_settings(contents: &str, path: &Path) -> Result<Settings> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| LeaveBridgeError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| LeaveBridgeError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(LeaveBridgeError::Config(format!("Unsupported settings format: {extension}"))),
    }
}

/// Probe multiple paths for settings files
///
/// Searches the working directory and its two parents first, then the
/// directory of the running executable and its two parents.
///
/// # Returns
/// The first settings file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| {
            SEARCH_DIRS
                .iter()
                .flat_map(move |dir| FILE_NAMES.iter().map(move |name| root.join(dir).join(name)))
        })
        .find(|candidate| candidate.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `LeaveBridgeError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        LeaveBridgeError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Optional environment variable; blank values count as unset
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
/// Unset or unrecognized values yield `default`.
fn env_bool(key: &str, default: bool) -> bool {
    let Ok(value) = std::env::var(key) else {
        return default;
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!(key, value = %value, default, "Unrecognized boolean value, using default");
            default
        }
    }
}
