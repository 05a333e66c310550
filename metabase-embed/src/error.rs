use crate::config::ConfigError;

/// Errors raised while building or verifying embed tokens and URLs.
#[derive(Debug)]
pub enum EmbedError {
    /// The secret is missing, or the signer rejected the key or claims.
    Signing(String),

    /// Unknown resource kind, or an id that is not a positive integer.
    InvalidResource(String),

    /// A token failed verification (malformed, bad signature, unexpected claims).
    InvalidToken(String),

    /// Configuration could not be loaded or validated.
    Config(ConfigError),
}

impl std::fmt::Display for EmbedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbedError::Signing(msg) => write!(f, "Signing error: {msg}"),
            EmbedError::InvalidResource(msg) => write!(f, "Invalid resource: {msg}"),
            EmbedError::InvalidToken(msg) => write!(f, "Invalid token: {msg}"),
            EmbedError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for EmbedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmbedError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for EmbedError {
    fn from(err: ConfigError) -> Self {
        EmbedError::Config(err)
    }
}
