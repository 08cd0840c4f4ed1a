use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    ParseError(#[from] toml::de::Error),

    #[error(transparent)]
    SerializeError(#[from] toml::ser::Error),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown log level encountered: '{0}'")]
    UnknownLogLevel(String),

    #[error("Failed to initialize logging: {0}")]
    LoggingError(String),
}
