//! Configuration errors for law-suite runs.
//!
//! Law violations are not errors; they are reported as witnesses inside a
//! rejected [`crate::LawReport`].

#[derive(Debug, thiserror::Error)]
pub enum LawError {
    #[error("failed to read file: {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml at {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown law `{0}` (run `dimap laws` for the list)")]
    UnknownLaw(String),

    #[error("unknown world `{0}` (expected one of: function, kleisli-pair, tally)")]
    UnknownWorld(String),

    #[error("invalid profile: {0}")]
    InvalidProfile(String),
}
