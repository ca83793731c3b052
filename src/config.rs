//! User settings (`config.toml`) and persisted preferences (`preferences.toml`).

use crate::cli::CliArgs;
use csvpad_core::preferences::PreferenceStore;
use csvpad_core::{DocumentOptions, ParseOptions, PastePolicy};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 65_536; // 64 KiB
const CONFIG_FILE_NAME: &str = "config.toml";
const PREFERENCES_FILE_NAME: &str = "preferences.toml";

/// How pasted blocks pick their separator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PastePolicySetting {
    /// One tab-or-comma decision for the whole block
    #[default]
    Block,
    /// A separate decision per pasted line
    Line,
}

impl From<PastePolicySetting> for PastePolicy {
    fn from(setting: PastePolicySetting) -> Self {
        match setting {
            PastePolicySetting::Block => PastePolicy::PerBlock,
            PastePolicySetting::Line => PastePolicy::PerLine,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub rows_per_page: usize,
    pub max_file_bytes: u64,
    pub strict: bool,
    pub paste_policy: PastePolicySetting,
}

impl Default for Settings {
    fn default() -> Self {
        let options = DocumentOptions::default();
        Self {
            rows_per_page: options.rows_per_page,
            max_file_bytes: options.max_bytes,
            strict: options.parse.strict,
            paste_policy: PastePolicySetting::default(),
        }
    }
}

impl Settings {
    /// Let command-line flags win over file values.
    pub fn with_overrides(mut self, args: &CliArgs) -> Self {
        if let Some(rows_per_page) = args.rows_per_page {
            self.rows_per_page = rows_per_page;
        }
        if let Some(max_bytes) = args.max_bytes {
            self.max_file_bytes = max_bytes;
        }
        if args.strict {
            self.strict = true;
        }
        self
    }

    pub fn document_options(&self) -> DocumentOptions {
        DocumentOptions {
            rows_per_page: self.rows_per_page,
            max_bytes: self.max_file_bytes,
            parse: ParseOptions {
                strict: self.strict,
            },
            paste_policy: self.paste_policy.into(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "csvpad")
}

fn user_config_path() -> Option<PathBuf> {
    project_dirs().map(|proj| proj.config_dir().join(CONFIG_FILE_NAME))
}

/// Read `config.toml`, falling back to defaults.
///
/// Problems never abort startup; they come back as warnings for the caller
/// to report. A missing default file is silent, a missing `explicit` path
/// is not.
pub fn load_settings(explicit: Option<&Path>) -> (Settings, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let Some(path) = explicit.map(Path::to_path_buf).or_else(user_config_path) else {
        return (Settings::default(), warnings);
    };

    if !path.exists() {
        if explicit.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Settings::default(), warnings);
    }

    let settings = match std::fs::metadata(&path) {
        Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => {
            warnings.push(format!(
                "Refusing to read {}: file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            ));
            None
        }
        Ok(_) => match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<Settings>(&content) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                    None
                }
            },
            Err(err) => {
                warnings.push(format!("Failed to read {}: {}", path.display(), err));
                None
            }
        },
        Err(err) => {
            warnings.push(format!(
                "Failed to read metadata for {}: {}",
                path.display(),
                err
            ));
            None
        }
    };

    (settings.unwrap_or_default(), warnings)
}

/// Preference store persisted as a flat TOML table.
///
/// Without a path (no usable config dir) values live only in memory.
#[derive(Debug, Default)]
pub struct TomlPreferences {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl TomlPreferences {
    /// Open `preferences.toml` next to `config.toml`.
    pub fn open_default() -> Self {
        match project_dirs() {
            Some(proj) => Self::open(proj.config_dir().join(PREFERENCES_FILE_NAME)),
            None => Self::default(),
        }
    }

    /// Open the store at `path`. An unreadable file starts empty.
    pub fn open(path: PathBuf) -> Self {
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), %err, "ignoring unreadable preferences");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self {
            path: Some(path),
            values,
        }
    }

    fn persist(&self) -> std::io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = toml::to_string(&self.values).map_err(std::io::Error::other)?;
        std::fs::write(path, content)
    }
}

impl PreferenceStore for TomlPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        if let Err(err) = self.persist() {
            tracing::warn!(key, %err, "failed to save preferences");
        }
    }
}
