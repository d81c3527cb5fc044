//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{InstallConfigError, InstallConfigResult};

use super::types::{Config, InteractiveMode, OutputFormat, Verbosity};

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "installconfig.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> InstallConfigResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| InstallConfigError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve and load the effective configuration.
///
/// An explicit path must exist. Otherwise the working-directory config is
/// tried, then the user config, then built-in defaults. Environment
/// overrides are applied last.
///
/// Warnings (unknown keys, invalid env values) are returned rather than
/// logged, since logging is usually configured from the result.
pub fn load_or_default<F>(
    explicit: Option<&Path>,
    cwd: &Path,
    get_env: F,
) -> InstallConfigResult<(Config, Vec<String>)>
where
    F: Fn(&str) -> Option<String>,
{
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => candidate_paths(cwd).into_iter().find(|p| p.exists()),
    };

    let mut warnings = Vec::new();
    let config = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            let (config, unknown) = load_with_warnings(&path)?;
            warnings.extend(unknown.iter().map(ToString::to_string));
            config
        }
        None => Config::default(),
    };

    let config = with_env_overrides(config, get_env, &mut warnings);
    Ok((config, warnings))
}

fn candidate_paths(cwd: &Path) -> Vec<PathBuf> {
    let mut paths = vec![cwd.join(PROJECT_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("installconfig").join("config.toml"));
    }
    paths
}

/// Apply environment variable overrides (INSTALLCONFIG_* prefix)
///
/// Invalid values are reported in `warnings` and ignored; the config value
/// stays.
pub fn with_env_overrides<F>(mut config: Config, get_env: F, warnings: &mut Vec<String>) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = env_value(
        &get_env,
        warnings,
        "INSTALLCONFIG_VERBOSITY",
        Verbosity::VALUES,
        Verbosity::parse,
    ) {
        config.output.verbosity = v;
    }

    if let Some(v) = env_value(
        &get_env,
        warnings,
        "INSTALLCONFIG_FORMAT",
        OutputFormat::VALUES,
        OutputFormat::parse,
    ) {
        config.output.format = v;
    }

    if let Some(v) = env_value(
        &get_env,
        warnings,
        "INSTALLCONFIG_INTERACTIVE",
        InteractiveMode::VALUES,
        InteractiveMode::parse,
    ) {
        config.prompt.interactive = v;
    }

    config
}

fn env_value<T, F, P>(
    get_env: &F,
    warnings: &mut Vec<String>,
    var_name: &str,
    valid: &[&str],
    parser: P,
) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
{
    let raw = get_env(var_name).filter(|v| !v.is_empty())?;
    let parsed = parser(&raw);
    if parsed.is_none() {
        warnings.push(format!(
            "invalid {} value '{}'{}; valid values: {}",
            var_name,
            raw,
            suggest_value(&raw, valid)
                .map(|s| format!(" (did you mean '{}'?)", s))
                .unwrap_or_default(),
            valid.join(", ")
        ));
    }
    parsed
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "verbosity",
        "format",
        "prompt",
        "interactive",
        "answers",
    ];

    closest(unknown, CANDIDATES).map(str::to_string)
}

fn suggest_value<'a>(value: &str, valid: &[&'a str]) -> Option<&'a str> {
    closest(&value.to_lowercase(), valid)
}

/// Closest candidate within two edits
fn closest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let mut best: Option<(&'a str, usize)> = None;
    for &candidate in candidates {
        let dist = levenshtein(input, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 && dist > 0 => Some(candidate),
        _ => None,
    }
}

/// Simple Levenshtein distance for typo detection
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b.len() + 1];

    for (i, a_char) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}
