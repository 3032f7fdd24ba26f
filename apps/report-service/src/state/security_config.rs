use std::env;
use std::fmt;
use std::time::Duration;

use jsonwebtoken::Algorithm;

use crate::error::AppError;

/// Minimum accepted length (in bytes) for an HMAC signing secret.
pub const MIN_SECRET_LEN: usize = 32;

/// Default lifetime of tokens minted by this process.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

/// Default clock-skew allowance applied to `exp`: none, a token is rejected
/// as soon as its expiry has passed. `AUTH_JWT_LEEWAY_SECS` opts into skew.
pub const DEFAULT_LEEWAY_SECS: u64 = 0;

/// Process-wide JWT settings shared by every service instance.
///
/// `jwt_secret` both signs and verifies. `previous_secrets` only verify, so
/// tokens minted before a rotation stay valid until they expire.
#[derive(Clone)]
pub struct SecurityConfig {
    pub jwt_secret: Vec<u8>,
    pub previous_secrets: Vec<Vec<u8>>,
    /// HMAC algorithm pinned for both signing and verification (defaults to HS256)
    pub algorithm: Algorithm,
    /// Required `iss` claim, if any
    pub issuer: Option<String>,
    pub leeway_secs: u64,
    pub token_ttl: Duration,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret and defaults
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            previous_secrets: Vec::new(),
            algorithm: Algorithm::HS256,
            issuer: None,
            leeway_secs: DEFAULT_LEEWAY_SECS,
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    pub fn with_previous_secret(mut self, secret: impl Into<Vec<u8>>) -> Self {
        self.previous_secrets.push(secret.into());
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn with_leeway_secs(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }

    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }

    /// Every secret a token may be verified against, current one first.
    pub fn verification_secrets(&self) -> impl Iterator<Item = &[u8]> {
        std::iter::once(self.jwt_secret.as_slice())
            .chain(self.previous_secrets.iter().map(Vec::as_slice))
    }

    /// Load the `AUTH_JWT_*` variables.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = env::var("AUTH_JWT_SECRET")
            .map_err(|_| AppError::config("AUTH_JWT_SECRET must be set".to_string()))?;
        validate_secret("AUTH_JWT_SECRET", &secret)?;

        let mut config = Self::new(secret.into_bytes());

        if let Ok(previous) = env::var("AUTH_JWT_PREVIOUS_SECRETS") {
            for secret in previous.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                validate_secret("AUTH_JWT_PREVIOUS_SECRETS", secret)?;
                config = config.with_previous_secret(secret.as_bytes().to_vec());
            }
        }

        if let Ok(name) = env::var("AUTH_JWT_ALGORITHM") {
            config = config.with_algorithm(parse_hmac_algorithm(&name)?);
        }

        if let Ok(issuer) = env::var("AUTH_JWT_ISSUER") {
            let issuer = issuer.trim();
            if !issuer.is_empty() {
                config = config.with_issuer(issuer);
            }
        }

        if let Ok(raw) = env::var("AUTH_JWT_LEEWAY_SECS") {
            let leeway = raw.trim().parse::<u64>().map_err(|_| {
                AppError::config(format!(
                    "AUTH_JWT_LEEWAY_SECS must be a non-negative integer, got '{raw}'"
                ))
            })?;
            config = config.with_leeway_secs(leeway);
        }

        if let Ok(raw) = env::var("AUTH_JWT_TTL_MINUTES") {
            let minutes = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|m| *m > 0)
                .ok_or_else(|| {
                    AppError::config(format!(
                        "AUTH_JWT_TTL_MINUTES must be a positive integer, got '{raw}'"
                    ))
                })?;
            config = config.with_token_ttl(Duration::from_secs(minutes * 60));
        }

        Ok(config)
    }
}

// Secrets never show up in logs or panics.
impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"<redacted>")
            .field("previous_secrets", &self.previous_secrets.len())
            .field("algorithm", &self.algorithm)
            .field("issuer", &self.issuer)
            .field("leeway_secs", &self.leeway_secs)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

fn validate_secret(name: &str, secret: &str) -> Result<(), AppError> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(AppError::config(format!(
            "{name} is too short. It should be at least {MIN_SECRET_LEN} characters."
        )));
    }
    Ok(())
}

/// Only the HMAC family is accepted: the gate verifies with shared secrets.
pub fn parse_hmac_algorithm(name: &str) -> Result<Algorithm, AppError> {
    match name.trim().to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(AppError::config(format!(
            "AUTH_JWT_ALGORITHM must be one of HS256, HS384, HS512, got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_secrets_lists_current_first() {
        let config = SecurityConfig::new(b"current".to_vec())
            .with_previous_secret(b"older".to_vec())
            .with_previous_secret(b"oldest".to_vec());

        let secrets: Vec<&[u8]> = config.verification_secrets().collect();
        assert_eq!(
            secrets,
            vec![b"current".as_slice(), b"older".as_slice(), b"oldest".as_slice()]
        );
    }

    #[test]
    fn debug_output_hides_secrets() {
        let config = SecurityConfig::new(b"super-secret-value".to_vec());
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn algorithm_parsing_is_case_insensitive_and_hmac_only() {
        assert_eq!(parse_hmac_algorithm("hs384").unwrap(), Algorithm::HS384);
        assert_eq!(parse_hmac_algorithm(" HS512 ").unwrap(), Algorithm::HS512);
        assert!(matches!(
            parse_hmac_algorithm("RS256"),
            Err(AppError::Config { .. })
        ));
    }
}
