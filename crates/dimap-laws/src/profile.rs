//! TOML law profiles.
//!
//! ```toml
//! profile = "finite"
//! world = "function"
//! laws = ["closed_naturality", "assoc"]
//! max_samples = 64
//! ```
//!
//! Every field is optional.

use crate::error::LawError;
use crate::law::LawId;
use crate::world::WorldId;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_PROFILE: &str = "finite";
pub const DEFAULT_MAX_SAMPLES: usize = 64;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProfile {
    #[serde(default)]
    profile: Option<String>,
    #[serde(default)]
    world: Option<String>,
    #[serde(default)]
    laws: Option<Vec<String>>,
    #[serde(default)]
    max_samples: Option<usize>,
}

/// A validated profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawProfile {
    /// Report label.
    pub profile: String,
    /// World used when the caller does not name one.
    pub world: WorldId,
    /// Laws to check, in catalogue order.
    pub laws: Vec<LawId>,
    /// Cap on generated values per quantified variable.
    pub max_samples: usize,
}

impl Default for LawProfile {
    fn default() -> Self {
        Self {
            profile: DEFAULT_PROFILE.to_string(),
            world: WorldId::Function,
            laws: LawId::ALL.to_vec(),
            max_samples: DEFAULT_MAX_SAMPLES,
        }
    }
}

impl LawProfile {
    pub fn load(path: &Path) -> Result<Self, LawError> {
        let text = fs::read_to_string(path).map_err(|source| LawError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text, &path.display().to_string())
    }

    /// Parse profile text; `origin` only labels errors.
    pub fn parse(text: &str, origin: &str) -> Result<Self, LawError> {
        let raw: RawProfile = toml::from_str(text).map_err(|source| LawError::ParseToml {
            path: origin.to_string(),
            source,
        })?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawProfile) -> Result<Self, LawError> {
        let defaults = Self::default();
        let profile = match raw.profile {
            Some(label) if label.trim().is_empty() => {
                return Err(LawError::InvalidProfile(
                    "profile label must not be empty".to_string(),
                ));
            }
            Some(label) => label,
            None => defaults.profile,
        };
        let world = match raw.world {
            Some(name) => name.parse()?,
            None => defaults.world,
        };
        let laws = match raw.laws {
            Some(names) => select_laws(&names)?,
            None => defaults.laws,
        };
        let max_samples = raw.max_samples.unwrap_or(defaults.max_samples);
        if max_samples == 0 {
            return Err(LawError::InvalidProfile(
                "max_samples must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            profile,
            world,
            laws,
            max_samples,
        })
    }

    /// Restrict to the named laws; an empty list keeps the current set.
    pub fn restrict_to(&mut self, names: &[String]) -> Result<(), LawError> {
        if !names.is_empty() {
            self.laws = select_laws(names)?;
        }
        Ok(())
    }
}

/// Resolve identifiers to a deduplicated list in catalogue order.
fn select_laws(names: &[String]) -> Result<Vec<LawId>, LawError> {
    if names.is_empty() {
        return Err(LawError::InvalidProfile(
            "laws must name at least one law when present".to_string(),
        ));
    }
    let mut laws = names
        .iter()
        .map(|name| name.parse::<LawId>())
        .collect::<Result<Vec<_>, _>>()?;
    laws.sort();
    laws.dedup();
    Ok(laws)
}
