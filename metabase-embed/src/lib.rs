pub mod builder;
pub mod config;
pub mod error;
pub mod iframe;
pub mod options;
pub mod params;
pub mod resource;
pub mod token;
pub mod url;

// Re-export primary public types for convenience.
pub use builder::EmbedUrlBuilder;
pub use config::{ConfigError, EmbedConfig};
pub use error::EmbedError;
pub use iframe::build_iframe;
pub use options::DisplayOptions;
pub use params::{ParamValue, ParameterMap};
pub use resource::{ResourceKind, ResourceReference};
pub use token::{build_token, verify_token, EmbedClaims};

pub mod prelude {
    //! Re-exports of the most commonly used embedding types.
    pub use crate::{DisplayOptions, EmbedConfig, EmbedError, EmbedUrlBuilder, ParameterMap};
}
