use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::EmbedError;
use crate::params::ParameterMap;
use crate::resource::ResourceReference;

/// The claim set signed into an embed token.
///
/// Exactly two claims are emitted: `resource` and `params`. No `exp` or
/// `iat` is added, so tokens stay valid until the secret is rotated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmbedClaims {
    pub resource: ResourceReference,
    pub params: ParameterMap,
}

impl EmbedClaims {
    pub fn new(resource: ResourceReference, params: ParameterMap) -> Self {
        Self { resource, params }
    }
}

/// Sign `resource` and `params` with HMAC-SHA-256 into a compact JWT.
///
/// Signing is deterministic: identical inputs and secret give identical tokens.
pub fn build_token(
    resource: ResourceReference,
    params: &ParameterMap,
    secret: &[u8],
) -> Result<String, EmbedError> {
    if secret.is_empty() {
        return Err(EmbedError::Signing("secret key is empty".into()));
    }

    #[derive(Serialize)]
    struct ClaimsRef<'a> {
        resource: ResourceReference,
        params: &'a ParameterMap,
    }

    let claims = ClaimsRef { resource, params };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| EmbedError::Signing(e.to_string()))?;

    debug!(
        kind = %resource.kind(),
        id = resource.id(),
        params = params.len(),
        "Signed embed token"
    );
    Ok(token)
}

/// Verify an embed token signed with `secret` and return its claims.
///
/// Only HS256 is accepted and no registered claims are required, matching
/// what [`build_token`] produces.
pub fn verify_token(token: &str, secret: &[u8]) -> Result<EmbedClaims, EmbedError> {
    if secret.is_empty() {
        return Err(EmbedError::Signing("secret key is empty".into()));
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;

    let data = decode::<EmbedClaims>(token, &DecodingKey::from_secret(secret), &validation)
        .map_err(|e| {
            let err = EmbedError::InvalidToken(e.to_string());
            warn!(error = %err, "Embed token verification failed");
            err
        })?;

    Ok(data.claims)
}
