use tracing::debug;

use crate::config::EmbedConfig;
use crate::error::EmbedError;
use crate::iframe::build_iframe;
use crate::options::DisplayOptions;
use crate::params::ParameterMap;
use crate::resource::{ResourceKind, ResourceReference};
use crate::token::{build_token, verify_token, EmbedClaims};
use crate::url::compose;

/// Builds signed embed URLs and iframes for one Metabase installation.
///
/// The builder is immutable; display settings are passed per call, so a
/// single instance can be shared freely between threads.
///
/// # Example
///
/// ```ignore
/// let builder = EmbedUrlBuilder::new(EmbedConfig::new("https://bi.example.com", secret));
/// let options = builder.config().display().clone().with_theme("night");
/// let params = ParameterMap::new().with("category", "Gizmo");
///
/// let url = builder.dashboard_url(7, &params, &options)?;
/// let html = builder.dashboard_iframe(7, &params, &options)?;
/// ```
#[derive(Debug, Clone)]
pub struct EmbedUrlBuilder {
    config: EmbedConfig,
}

impl EmbedUrlBuilder {
    pub fn new(config: EmbedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    /// Sign a token for `resource` with this installation's secret.
    pub fn token(
        &self,
        resource: ResourceReference,
        params: &ParameterMap,
    ) -> Result<String, EmbedError> {
        build_token(resource, params, self.config.secret())
    }

    /// Check a token against this installation's secret.
    pub fn verify(&self, token: &str) -> Result<EmbedClaims, EmbedError> {
        verify_token(token, self.config.secret())
    }

    /// Build the embed URL for `kind`/`id`.
    ///
    /// The result has the form
    /// `<site>/embed/<kind>/<token>#bordered=<bool>&titled=<bool>[&theme=<name>]`.
    pub fn url(
        &self,
        kind: ResourceKind,
        id: i64,
        params: &ParameterMap,
        options: &DisplayOptions,
    ) -> Result<String, EmbedError> {
        self.url_for(ResourceReference::new(kind, id)?, params, options)
    }

    pub fn url_for(
        &self,
        resource: ResourceReference,
        params: &ParameterMap,
        options: &DisplayOptions,
    ) -> Result<String, EmbedError> {
        let token = self.token(resource, params)?;
        let url = compose(self.config.site_url(), resource.kind(), &token, options);
        debug!(kind = %resource.kind(), id = resource.id(), "Built embed URL");
        Ok(url)
    }

    pub fn question_url(
        &self,
        id: i64,
        params: &ParameterMap,
        options: &DisplayOptions,
    ) -> Result<String, EmbedError> {
        self.url(ResourceKind::Question, id, params, options)
    }

    pub fn dashboard_url(
        &self,
        id: i64,
        params: &ParameterMap,
        options: &DisplayOptions,
    ) -> Result<String, EmbedError> {
        self.url(ResourceKind::Dashboard, id, params, options)
    }

    /// Build the embed URL and wrap it in an iframe sized by `options`.
    pub fn iframe(
        &self,
        kind: ResourceKind,
        id: i64,
        params: &ParameterMap,
        options: &DisplayOptions,
    ) -> Result<String, EmbedError> {
        let url = self.url(kind, id, params, options)?;
        Ok(build_iframe(&url, &options.height, &options.width))
    }

    pub fn question_iframe(
        &self,
        id: i64,
        params: &ParameterMap,
        options: &DisplayOptions,
    ) -> Result<String, EmbedError> {
        self.iframe(ResourceKind::Question, id, params, options)
    }

    pub fn dashboard_iframe(
        &self,
        id: i64,
        params: &ParameterMap,
        options: &DisplayOptions,
    ) -> Result<String, EmbedError> {
        self.iframe(ResourceKind::Dashboard, id, params, options)
    }
}
