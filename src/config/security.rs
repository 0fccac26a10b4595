// ABOUTME: Token configuration: signing secret and access/refresh token lifetimes
// ABOUTME: The secret is mandatory in production and generated per process elsewhere
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

use super::environment::{env_var_or, Environment};
use crate::errors::{AppError, AppResult, ErrorCode};
use rand::RngCore;
use std::env;
use std::fmt;
use tracing::warn;
use zeroize::Zeroizing;

/// Minimum accepted secret length in bytes
const MIN_SECRET_LEN: usize = 32;

/// Signing secret, wiped from memory on drop and never printed
#[derive(Clone)]
pub struct TokenSecret(Zeroizing<String>);

impl TokenSecret {
    /// Random 32-byte secret, hex encoded
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = Zeroizing::new([0_u8; MIN_SECRET_LEN]);
        rand::thread_rng().fill_bytes(bytes.as_mut());
        Self(Zeroizing::new(hex::encode(bytes.as_ref())))
    }

    /// Raw secret bytes for signing
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenSecret([REDACTED])")
    }
}

/// Authentication configuration for issued tokens
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Signing secret
    pub token_secret: TokenSecret,
    /// Access token lifetime in minutes
    pub access_token_expiry_minutes: u32,
    /// Refresh token lifetime in days
    pub refresh_token_expiry_days: u32,
}

impl AuthConfig {
    /// Load token configuration from environment
    ///
    /// `NUTRILOG_TOKEN_SECRET` is required in production. Outside production a
    /// random secret is generated, so tokens do not survive a restart.
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` if the secret is absent in production,
    /// `ConfigInvalid` if it is shorter than 32 bytes or a lifetime is not a
    /// positive integer
    pub fn from_env(environment: Environment) -> AppResult<Self> {
        let token_secret = match env::var("NUTRILOG_TOKEN_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => {
                if secret.len() < MIN_SECRET_LEN {
                    return Err(AppError::new(
                        ErrorCode::ConfigInvalid,
                        format!("NUTRILOG_TOKEN_SECRET must be at least {MIN_SECRET_LEN} bytes"),
                    ));
                }
                TokenSecret(Zeroizing::new(secret))
            }
            _ if environment.is_production() => {
                return Err(AppError::new(
                    ErrorCode::ConfigMissing,
                    "NUTRILOG_TOKEN_SECRET is required in production",
                ));
            }
            _ => {
                warn!(
                    environment = %environment,
                    "NUTRILOG_TOKEN_SECRET not set, generating an ephemeral secret"
                );
                TokenSecret::generate()
            }
        };

        Ok(Self {
            token_secret,
            access_token_expiry_minutes: parse_lifetime("NUTRILOG_ACCESS_TOKEN_MINUTES", "30")?,
            refresh_token_expiry_days: parse_lifetime("NUTRILOG_REFRESH_TOKEN_DAYS", "7")?,
        })
    }
}

fn parse_lifetime(key: &str, default: &str) -> AppResult<u32> {
    env_var_or(key, default)
        .parse::<u32>()
        .ok()
        .filter(|value| *value > 0)
        .ok_or_else(|| {
            AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{key} must be a positive integer"),
            )
        })
}
