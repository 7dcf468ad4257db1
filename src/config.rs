use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://airapi.airly.eu/v2/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base API URL including the version prefix, e.g. `https://airapi.airly.eu/v2/`.
    pub url: String,
    /// Airly API key, sent in the `apikey` header.
    pub key: String,
    /// Preferred response language (`en`, `pl`), sent as `Accept-Language`.
    pub language: Option<String>,
    /// Upper bound for a single request.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            key: key.into(),
            language: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Default, PartialEq)]
struct RcConfig {
    url: Option<String>,
    key: Option<String>,
    language: Option<String>,
}

/// Resolves the configuration, in order of precedence, from:
/// - explicit arguments
/// - environment variables `AIRLY_URL` / `AIRLY_API_KEY` / `AIRLY_LANGUAGE`
/// - the rc file named by `AIRLY_RC`, or `.airlyrc` in the current or home directory
pub fn load_config(
    url: Option<String>,
    key: Option<String>,
    language: Option<String>,
) -> Result<ClientConfig> {
    load_config_from(url, key, language, &rc_candidates())
}

fn load_config_from(
    url: Option<String>,
    key: Option<String>,
    language: Option<String>,
    rc_candidates: &[PathBuf],
) -> Result<ClientConfig> {
    let mut url = url.or_else(|| env_var("AIRLY_URL"));
    let mut key = key.or_else(|| env_var("AIRLY_API_KEY"));
    let mut language = language.or_else(|| env_var("AIRLY_LANGUAGE"));

    if url.is_none() || key.is_none() || language.is_none() {
        if let Some(rc_path) = rc_candidates.iter().find(|p| p.exists()) {
            let cfg = read_rc(rc_path)?;
            tracing::debug!(path = %rc_path.display(), "loaded rc file");
            url = url.or(cfg.url);
            key = key.or(cfg.key);
            language = language.or(cfg.language);
        }
    }

    let Some(key) = key else {
        if rc_candidates.is_empty() {
            return Err(Error::Configuration(
                "missing api key (set AIRLY_API_KEY or create .airlyrc)".into(),
            ));
        }
        return Err(Error::Configuration(format!(
            "missing api key (set AIRLY_API_KEY or put `key:` in one of: {})",
            rc_candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )));
    };

    let mut cfg = ClientConfig::new(key);
    if let Some(url) = url {
        cfg.url = url;
    }
    cfg.language = language;
    Ok(cfg)
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn read_rc(path: &Path) -> Result<RcConfig> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        Error::Configuration(format!(
            "failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(parse_rc(&text))
}

fn parse_rc(text: &str) -> RcConfig {
    let mut cfg = RcConfig::default();

    // `key:` may stand alone with the value on the next line.
    let mut pending: Option<&str> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(name) = pending.take() {
            if !line.contains(':') || (name == "url" && looks_like_url(line)) {
                assign(&mut cfg, name, strip_quotes(line));
                continue;
            }
        }

        if let Some((k, v)) = line.split_once(':') {
            let k = k.trim();
            let v = strip_quotes(v);
            if v.is_empty() {
                pending = Some(k);
            } else {
                assign(&mut cfg, k, v);
            }
        }
    }

    cfg
}

fn assign(cfg: &mut RcConfig, name: &str, value: &str) {
    let value = Some(value.to_string());
    match name {
        "url" => cfg.url = value,
        "key" => cfg.key = value,
        "language" => cfg.language = value,
        _ => {}
    }
}

fn looks_like_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://") || s.starts_with("\"http")
}

fn strip_quotes(s: &str) -> &str {
    let s = s.trim();
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')))
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

fn rc_candidates() -> Vec<PathBuf> {
    // Search order:
    // 1) AIRLY_RC (explicit)
    // 2) ./.airlyrc (current working directory)
    // 3) ~/.airlyrc
    if let Some(p) = env_var("AIRLY_RC") {
        return vec![PathBuf::from(p)];
    }

    let mut v = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        v.push(cwd.join(".airlyrc"));
    }
    if let Some(home) = dirs::home_dir() {
        v.push(home.join(".airlyrc"));
    }
    v
}
