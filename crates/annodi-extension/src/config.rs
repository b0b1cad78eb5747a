//! Configuration resolution
//!
//! Three concerns live here:
//!
//! - schema validation of the extension's own configuration section,
//! - the deprecated `doctrine.ignoredAnnotations` merge, and
//! - ingestion of the application configuration tree via figment.
//!
//! Merging never fails; malformed values surface later as schema errors so
//! the caller gets one consistent failure mode before any registration.

use std::fmt;
use std::path::Path;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde_json::{Map, Value};
use tracing::warn;

use annodi_domain::config::AnnotationsConfig;
use annodi_domain::constants::{DEFAULT_CACHE, LEGACY_IGNORE_KEY, LEGACY_SECTION};
use annodi_domain::error::{Error, Result};

/// Environment variable prefix recognized by [`load_tree`]
pub const ENV_PREFIX: &str = "ANNODI_";

/// Non-fatal notice emitted when the deprecated configuration path is used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationNotice {
    /// The deprecated key path that was read
    pub legacy_path: String,
    /// The key path that replaces it
    pub replacement: String,
}

impl fmt::Display for DeprecationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Section '{}' is deprecated, please use '{}'",
            self.legacy_path, self.replacement
        )
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

/// Validate a raw configuration section against the declared schema
///
/// Applies defaults for absent options; `debug` defaults to the host's
/// debug flag. An absent or `null` section is a valid empty section.
///
/// # Errors
///
/// Returns [`Error::Schema`] for unexpected options and for any option of
/// the wrong type. No registration may happen before this succeeds.
pub fn validate_schema(raw: &Value, debug_default: bool) -> Result<AnnotationsConfig> {
    let empty = Map::new();
    let section = match raw {
        Value::Null => &empty,
        Value::Object(map) => map,
        other => {
            return Err(Error::schema(
                "",
                format!("expected a mapping, got {}", json_type(other)),
            ))
        }
    };

    for key in section.keys() {
        if !matches!(key.as_str(), "ignore" | "cache" | "debug") {
            return Err(Error::schema(key, "unexpected option"));
        }
    }

    let ignore = match section.get("ignore") {
        None => AnnotationsConfig::default_ignore(),
        Some(Value::Array(items)) => {
            let mut names = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match item {
                    Value::String(name) => names.push(name.clone()),
                    other => {
                        return Err(Error::schema(
                            format!("ignore[{index}]"),
                            format!("expected a string, got {}", json_type(other)),
                        ))
                    }
                }
            }
            names
        }
        Some(other) => {
            return Err(Error::schema(
                "ignore",
                format!("expected a list of strings, got {}", json_type(other)),
            ))
        }
    };

    let cache = match section.get("cache") {
        None => DEFAULT_CACHE.to_string(),
        Some(Value::String(name)) => name.clone(),
        Some(other) => {
            return Err(Error::schema(
                "cache",
                format!("expected a string, got {}", json_type(other)),
            ))
        }
    };

    let debug = match section.get("debug") {
        None => debug_default,
        Some(Value::Bool(flag)) => *flag,
        Some(other) => {
            return Err(Error::schema(
                "debug",
                format!("expected a boolean, got {}", json_type(other)),
            ))
        }
    };

    Ok(AnnotationsConfig {
        ignore,
        cache,
        debug,
    })
}

/// Merge the deprecated `doctrine.ignoredAnnotations` section into the
/// extension's raw configuration
///
/// Local `ignore` entries are preserved and legacy entries are appended
/// after them, without de-duplication. When the local section has no
/// `ignore`, the schema defaults are materialized first so legacy entries
/// extend them rather than replace them. Absent, empty or non-list legacy
/// sections merge nothing and emit no notice.
pub fn merge_legacy(
    extension_name: &str,
    local: &Value,
    global: &Value,
) -> (Value, Option<DeprecationNotice>) {
    let legacy = global
        .get(LEGACY_SECTION)
        .and_then(|section| section.get(LEGACY_IGNORE_KEY));
    let entries = match legacy {
        Some(Value::Array(entries)) if !entries.is_empty() => entries,
        _ => return (local.clone(), None),
    };

    let mut merged = match local {
        Value::Object(map) => map.clone(),
        Value::Null => Map::new(),
        // malformed section; schema validation reports the shape error
        other => return (other.clone(), None),
    };

    let slot = merged.entry("ignore".to_string()).or_insert_with(|| {
        Value::Array(
            AnnotationsConfig::default_ignore()
                .into_iter()
                .map(Value::String)
                .collect(),
        )
    });
    if let Value::Array(items) = slot {
        items.extend(entries.iter().cloned());
    }
    // a malformed local `ignore` is left untouched for schema validation

    let notice = DeprecationNotice {
        legacy_path: format!("{LEGACY_SECTION}.{LEGACY_IGNORE_KEY}"),
        replacement: format!("{extension_name}.ignore"),
    };
    warn!(
        legacy = %notice.legacy_path,
        replacement = %notice.replacement,
        "deprecated configuration section in use"
    );

    (Value::Object(merged), Some(notice))
}

/// Resolve the effective configuration: legacy merge, then schema validation
pub fn resolve_config(
    extension_name: &str,
    local: &Value,
    global: &Value,
    debug_default: bool,
) -> Result<(AnnotationsConfig, Vec<DeprecationNotice>)> {
    let (merged, notice) = merge_legacy(extension_name, local, global);
    let config = validate_schema(&merged, debug_default)?;
    Ok((config, notice.into_iter().collect()))
}

/// Load the application configuration tree from a TOML file, with
/// `ANNODI_`-prefixed environment overrides
pub fn load_tree(path: impl AsRef<Path>) -> Result<Value> {
    Figment::new()
        .merge(Toml::file(path.as_ref()))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| Error::config_with_source("failed to load configuration tree", e))
}
