use std::fmt;

use log::debug;
use serde::Serialize;

use crate::error::VersionerError;
use crate::git::RevisionSource;

/// Label used when no tag is reachable.
pub const BASE_LABEL: &str = "v0.0.0";

const DIRTY: &str = "dirty";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VersionString(String);

impl VersionString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Describe,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub version: VersionString,
    pub source: Source,
    /// Trimmed tool output the version was derived from.
    pub raw: String,
}

/// Reformat a `git describe --tags --dirty` line.
///
/// `TAG-N-gHASH-dirty` becomes `TAG.devN.dirty`; segments other than the
/// tag, the commit distance and the dirty marker are dropped.
pub fn format_description(description: &str) -> VersionString {
    let elements: Vec<&str> = description.trim_end().split('-').collect();

    let mut components = vec![elements[0].to_string()];
    if elements.len() > 1 {
        if is_distance(elements[1]) {
            components.push(format!("dev{}", elements[1]));
        }
        if elements.contains(&DIRTY) {
            components.push(DIRTY.to_string());
        }
    }

    VersionString(components.join("."))
}

/// `v0.0.0-<revision>` for trees without a reachable tag.
pub fn fallback_version(revision: &str) -> VersionString {
    VersionString(format!("{BASE_LABEL}-{}", revision.trim_end()))
}

fn is_distance(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Resolve the version of the revision `source` points at.
///
/// Any failure of the describe query switches to the short revision query;
/// a failure there is returned to the caller.
pub fn resolve(source: &impl RevisionSource) -> Result<Resolution, VersionerError> {
    let description = match source.describe() {
        Ok(output) if !output.trim().is_empty() => output,
        Ok(_) => {
            debug!("describe returned no output, falling back to short revision");
            return resolve_fallback(source);
        }
        Err(e) => {
            debug!("describe failed, falling back to short revision: {}", e.message);
            return resolve_fallback(source);
        }
    };

    let raw = description.trim_end().to_string();
    Ok(Resolution {
        version: format_description(&raw),
        source: Source::Describe,
        raw,
    })
}

/// Shorthand for [`resolve`] when only the version string matters.
pub fn resolve_version(source: &impl RevisionSource) -> Result<VersionString, VersionerError> {
    resolve(source).map(|r| r.version)
}

fn resolve_fallback(source: &impl RevisionSource) -> Result<Resolution, VersionerError> {
    let revision = source.short_revision()?;
    let raw = revision.trim_end().to_string();
    if raw.is_empty() {
        return Err(VersionerError::invalid_output(
            "short revision query",
            "empty revision identifier",
        ));
    }

    Ok(Resolution {
        version: fallback_version(&raw),
        source: Source::Fallback,
        raw,
    })
}
