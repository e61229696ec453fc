//! Bearer-token identity provider.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use common::{AppError, AppResult, JwtConfig};
use domain::{Account, Capabilities, UserId, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};

use super::{IdentityProvider, UserDirectory};

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: UserId,
    pub exp: i64,
    pub iat: i64,
}

/// Token issued for an account
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    /// JWT access token
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Token expiration time in seconds
    pub expires_in: i64,
}

/// Identity provider that verifies HS256 tokens against a [`UserDirectory`].
pub struct JwtIdentityProvider {
    directory: UserDirectory,
    config: JwtConfig,
}

impl JwtIdentityProvider {
    pub fn new(directory: UserDirectory, config: JwtConfig) -> Self {
        Self { directory, config }
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Issue a bearer token for `account`.
    pub fn issue_token(&self, account: &Account) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.expiration_hours);

        let claims = Claims {
            sub: account.id,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.secret.as_bytes()),
        )?;

        Ok(TokenResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.config.expiration_hours * SECONDS_PER_HOUR,
        })
    }

    fn verify(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

#[async_trait]
impl IdentityProvider for JwtIdentityProvider {
    async fn resolve(&self, token: &str) -> AppResult<UserId> {
        let claims = self.verify(token)?;

        if self.directory.get(claims.sub).is_none() {
            warn!(user_id = claims.sub, "Token names an unknown account");
            return Err(AppError::InvalidToken);
        }

        debug!(user_id = claims.sub, "Resolved bearer token");
        Ok(claims.sub)
    }

    async fn display_name(&self, id: UserId) -> AppResult<String> {
        Ok(self
            .directory
            .get(id)
            .map(|account| account.nickname.clone())
            .unwrap_or_default())
    }

    async fn capabilities(&self, id: UserId) -> AppResult<Capabilities> {
        Ok(self
            .directory
            .get(id)
            .map(|account| account.role.capabilities())
            .unwrap_or_default())
    }
}
