use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    ///
    /// Snowflake ids must be non-zero unsigned integers; `VOICE_CHANNELS`
    /// must be a comma-separated list of them.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// The environment variable name
        name: String,
        /// The value that failed to parse
        value: String,
    },
}
