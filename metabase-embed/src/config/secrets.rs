use super::ConfigError;

/// Resolves the reference inside a `${...}` placeholder to its value.
pub trait SecretResolver {
    fn resolve(&self, reference: &str) -> Result<String, ConfigError>;
}

/// Resolves placeholders from the process environment and from files.
///
/// - `${VAR}` and `${env:VAR}` read an environment variable
/// - `${file:/run/secrets/metabase}` reads a file, trimmed
pub struct DefaultSecretResolver;

impl SecretResolver for DefaultSecretResolver {
    fn resolve(&self, reference: &str) -> Result<String, ConfigError> {
        let reference = reference.trim();
        if let Some(path) = reference.strip_prefix("file:") {
            let path = path.trim();
            return std::fs::read_to_string(path)
                .map(|s| s.trim().to_string())
                .map_err(|e| ConfigError::Load(format!("secret file '{path}': {e}")));
        }
        let var = reference.strip_prefix("env:").unwrap_or(reference).trim();
        std::env::var(var).map_err(|_| ConfigError::NotFound(format!("env:{var}")))
    }
}

/// Replace every `${...}` placeholder in `value`.
///
/// Substituted text is not scanned again, so a secret that itself contains
/// `${` is inserted literally.
pub fn resolve_placeholders(
    value: &str,
    resolver: &dyn SecretResolver,
) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find('}')
            .ok_or_else(|| ConfigError::Load(format!("unclosed placeholder in '{value}'")))?;
        out.push_str(&resolver.resolve(&after[..end])?);
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}
