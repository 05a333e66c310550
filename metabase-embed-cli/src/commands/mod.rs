use std::collections::BTreeMap;
use std::path::Path;

use clap::Args;
use metabase_embed::{
    DisplayOptions, EmbedConfig, EmbedError, EmbedUrlBuilder, ParamValue, ParameterMap,
    ResourceKind, ResourceReference,
};
use tracing::debug;

/// The resource to embed and the parameters to lock into its token.
#[derive(Args, Debug, Clone)]
pub struct ResourceArgs {
    /// Resource kind: `question` or `dashboard`
    pub kind: ResourceKind,

    /// Numeric id of the question or dashboard
    pub id: i64,

    /// Locked parameter as `name=value`; repeat a name to pass several values
    #[arg(long = "param", short = 'p', value_name = "NAME=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, ParamValue)>,
}

/// Overrides for the configured display defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct DisplayArgs {
    /// Show the border
    #[arg(long, conflicts_with = "no_border")]
    pub border: bool,

    /// Hide the border
    #[arg(long)]
    pub no_border: bool,

    /// Show the title
    #[arg(long, conflicts_with = "untitled")]
    pub titled: bool,

    /// Hide the title
    #[arg(long)]
    pub untitled: bool,

    /// Theme name, e.g. `night` or `transparent`
    #[arg(long)]
    pub theme: Option<String>,

    /// CSS width of the iframe
    #[arg(long)]
    pub width: Option<String>,

    /// CSS height of the iframe
    #[arg(long)]
    pub height: Option<String>,
}

impl DisplayArgs {
    /// Layer the flags given on the command line over `defaults`.
    pub fn apply(&self, defaults: &DisplayOptions) -> DisplayOptions {
        let mut options = defaults.clone();
        if self.border {
            options.border = true;
        }
        if self.no_border {
            options.border = false;
        }
        if self.titled {
            options.title = true;
        }
        if self.untitled {
            options.title = false;
        }
        if let Some(theme) = &self.theme {
            options = options.with_theme(theme.clone());
        }
        if let Some(width) = &self.width {
            options.width = width.clone();
        }
        if let Some(height) = &self.height {
            options.height = height.clone();
        }
        options
    }
}

/// Parse `name=value`. `null` becomes null. A value becomes a number only
/// when it is already in canonical form (`12`, `0.25`); `02134`, `+5` or
/// `1e3` stay text so the signed value is exactly what was typed.
pub fn parse_param(raw: &str) -> Result<(String, ParamValue), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing parameter name in '{raw}'"));
    }

    let value = if value == "null" {
        ParamValue::Null
    } else if let Some(n) = value.parse::<i64>().ok().filter(|n| n.to_string() == value) {
        ParamValue::from(n)
    } else if let Some(n) = value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && n.to_string() == value)
    {
        ParamValue::from(n)
    } else {
        ParamValue::from(value)
    };
    Ok((name.to_string(), value))
}

/// Group parsed parameters by name. A name given more than once becomes a list.
pub fn collect_params(pairs: &[(String, ParamValue)]) -> ParameterMap {
    let mut grouped: BTreeMap<&str, Vec<ParamValue>> = BTreeMap::new();
    for (name, value) in pairs {
        grouped.entry(name.as_str()).or_default().push(value.clone());
    }
    grouped
        .into_iter()
        .map(|(name, mut values)| {
            let value = if values.len() == 1 {
                values.remove(0)
            } else {
                ParamValue::List(values)
            };
            (name, value)
        })
        .collect()
}

/// Load the embed config from `path`, or from `METABASE_*` variables when
/// no file is given.
pub fn load_config(path: Option<&Path>) -> Result<EmbedConfig, EmbedError> {
    let config = match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading embed config file");
            EmbedConfig::from_yaml_file(path)?
        }
        None => EmbedConfig::from_env()?,
    };
    Ok(config)
}

pub fn url(
    builder: &EmbedUrlBuilder,
    resource: &ResourceArgs,
    display: &DisplayArgs,
) -> Result<String, EmbedError> {
    let options = display.apply(builder.config().display());
    builder.url(resource.kind, resource.id, &collect_params(&resource.params), &options)
}

pub fn iframe(
    builder: &EmbedUrlBuilder,
    resource: &ResourceArgs,
    display: &DisplayArgs,
) -> Result<String, EmbedError> {
    let options = display.apply(builder.config().display());
    builder.iframe(resource.kind, resource.id, &collect_params(&resource.params), &options)
}

pub fn token(builder: &EmbedUrlBuilder, resource: &ResourceArgs) -> Result<String, EmbedError> {
    let reference = ResourceReference::new(resource.kind, resource.id)?;
    builder.token(reference, &collect_params(&resource.params))
}
