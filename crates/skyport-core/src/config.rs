//! Shared configuration file lookup.
//!
//! Reads the INI-style `~/.aws/config` and `~/.aws/credentials` files and
//! answers profile-scoped key lookups. Paths and the active profile can be
//! overridden through the environment:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `AWS_CONFIG_FILE` | `~/.aws/config` |
//! | `AWS_SHARED_CREDENTIALS_FILE` | `~/.aws/credentials` |
//! | `AWS_PROFILE` | `default` |

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::ProviderError;

/// Profile used when none is selected.
pub const DEFAULT_PROFILE: &str = "default";
/// Environment variable selecting the profile.
pub const ENV_PROFILE: &str = "AWS_PROFILE";
/// Environment variable overriding the config file path.
pub const ENV_CONFIG_PATH: &str = "AWS_CONFIG_FILE";
/// Environment variable overriding the credentials file path.
pub const ENV_CREDENTIALS_PATH: &str = "AWS_SHARED_CREDENTIALS_FILE";

/// Key-value pairs of one profile.
pub type Profile = BTreeMap<String, String>;

/// Both shared files, parsed into profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedConfigFiles {
    /// Profiles from the config file, keyed by profile name.
    pub config_file: BTreeMap<String, Profile>,
    /// Profiles from the credentials file, keyed by profile name.
    pub credentials_file: BTreeMap<String, Profile>,
}

/// Options for loading and querying the shared files.
#[derive(Debug, Clone, Default)]
pub struct SharedConfigInit {
    /// Profile to query; falls back to `AWS_PROFILE`, then `default`.
    pub profile: Option<String>,
    /// Config file path override.
    pub config_filepath: Option<PathBuf>,
    /// Credentials file path override.
    pub credentials_filepath: Option<PathBuf>,
    /// Already loaded files, to avoid reading them again.
    pub loaded: Option<Arc<SharedConfigFiles>>,
}

impl SharedConfigInit {
    /// The profile this lookup targets.
    #[must_use]
    pub fn resolve_profile(&self) -> String {
        self.profile
            .clone()
            .or_else(|| std::env::var(ENV_PROFILE).ok().filter(|p| !p.is_empty()))
            .unwrap_or_else(|| DEFAULT_PROFILE.to_owned())
    }

    fn config_path(&self) -> Option<PathBuf> {
        self.config_filepath
            .clone()
            .or_else(|| std::env::var_os(ENV_CONFIG_PATH).map(PathBuf::from))
            .or_else(|| under_home(dirs::home_dir(), "config"))
    }

    fn credentials_path(&self) -> Option<PathBuf> {
        self.credentials_filepath
            .clone()
            .or_else(|| std::env::var_os(ENV_CREDENTIALS_PATH).map(PathBuf::from))
            .or_else(|| under_home(dirs::home_dir(), "credentials"))
    }
}

/// `<home>/.aws/<file>`, or nothing when there is no home directory.
fn under_home(home: Option<PathBuf>, file: &str) -> Option<PathBuf> {
    home.map(|home| home.join(".aws").join(file))
}

/// Load both shared files. Missing or unreadable files count as empty.
#[must_use]
pub fn load_shared_config_files(init: &SharedConfigInit) -> Arc<SharedConfigFiles> {
    if let Some(loaded) = &init.loaded {
        return Arc::clone(loaded);
    }
    let config_file = normalize_config_file(parse_ini(&read_optional(init.config_path())));
    let credentials_file = parse_ini(&read_optional(init.credentials_path()));
    Arc::new(SharedConfigFiles {
        config_file,
        credentials_file,
    })
}

/// Look up `key` in the active profile of the config file.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use skyport_core::config::{SharedConfigFiles, SharedConfigInit, from_shared_config_files};
///
/// let mut files = SharedConfigFiles::default();
/// files
///     .config_file
///     .entry("default".to_owned())
///     .or_default()
///     .insert("region".to_owned(), "eu-west-1".to_owned());
/// let init = SharedConfigInit {
///     profile: Some("default".to_owned()),
///     loaded: Some(Arc::new(files)),
///     ..SharedConfigInit::default()
/// };
/// assert_eq!(from_shared_config_files("region", &init).unwrap(), "eu-west-1");
/// ```
pub fn from_shared_config_files(key: &str, init: &SharedConfigInit) -> Result<String, ProviderError> {
    select_from_shared_config_files(key, |profile| profile.get(key).cloned(), init)
}

/// Apply `selector` to the active profile of the config file.
///
/// A missing profile is presented to the selector as an empty one. `what`
/// names the value in the error message.
pub fn select_from_shared_config_files<T, F>(
    what: &str,
    selector: F,
    init: &SharedConfigInit,
) -> Result<T, ProviderError>
where
    F: FnOnce(&Profile) -> Option<T>,
{
    let files = load_shared_config_files(init);
    let profile = init.resolve_profile();
    let empty = Profile::new();
    let section = files.config_file.get(&profile).unwrap_or(&empty);
    selector(section).ok_or_else(|| {
        ProviderError::new(format!(
            "No {what} found for profile {profile} in SDK configuration files"
        ))
    })
}

fn read_optional(path: Option<PathBuf>) -> String {
    path.map(|path| slurp(&path)).unwrap_or_default()
}

fn slurp(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read shared config file");
            String::new()
        }
    }
}

/// Parse INI text into sections.
///
/// Lines starting with `#` or `;` (or containing them after whitespace) are
/// comments; keys outside any section are ignored.
#[must_use]
pub fn parse_ini(content: &str) -> BTreeMap<String, Profile> {
    let mut sections: BTreeMap<String, Profile> = BTreeMap::new();
    let mut current: Option<String> = None;
    for raw_line in content.lines() {
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }
        if let Some(name) = line
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            let name = name.trim();
            if name.is_empty() || name.contains(['[', ']']) {
                current = None;
                continue;
            }
            sections.entry(name.to_owned()).or_default();
            current = Some(name.to_owned());
            continue;
        }
        let Some(section) = current.as_ref() else {
            continue;
        };
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if !key.is_empty() {
                sections
                    .entry(section.clone())
                    .or_default()
                    .insert(key.to_owned(), value.trim().to_owned());
            }
        }
    }
    sections
}

fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if (*b == b'#' || *b == b';') && (i == 0 || bytes[i - 1].is_ascii_whitespace()) {
            return &line[..i];
        }
    }
    line
}

/// Keep `[default]` and `[profile name]` sections, keyed by profile name.
fn normalize_config_file(sections: BTreeMap<String, Profile>) -> BTreeMap<String, Profile> {
    sections
        .into_iter()
        .filter_map(|(name, profile)| {
            if name == DEFAULT_PROFILE {
                return Some((name, profile));
            }
            let rest = name.strip_prefix("profile")?;
            if !rest.starts_with(char::is_whitespace) {
                return None;
            }
            let rest = rest.trim();
            let unquoted = rest
                .strip_prefix('"')
                .and_then(|r| r.strip_suffix('"'))
                .or_else(|| rest.strip_prefix('\'').and_then(|r| r.strip_suffix('\'')))
                .unwrap_or(rest);
            (!unquoted.is_empty()).then(|| (unquoted.to_owned(), profile))
        })
        .collect()
}
