use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("no theme context attached to the settings registry")]
    MissingTheme,

    #[error("default not found for: {0}")]
    MissingDefault(String),

    #[error("unknown setting: {0}")]
    UnknownSetting(String),

    #[error("setting registered twice: {0}")]
    DuplicateSetting(String),

    #[error("invalid validation pattern for {key}: {source}")]
    InvalidPattern {
        key: String,
        #[source]
        source: regex::Error,
    },

    #[error("value rejected for {key}: {reason}")]
    Rejected { key: String, reason: String },

    #[error("invalid theme overrides: {0}")]
    Overrides(#[from] serde_json::Error),
}
