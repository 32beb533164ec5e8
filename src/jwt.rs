use crate::error::{self, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub token_type: String,
    #[serde(rename = "exp")]
    pub expires_at: i64,
    #[serde(rename = "iat")]
    pub issued_at: i64,
    pub jti: String,
    pub user_id: i32,
}

pub trait JwtTrait: Send + Sync {
    fn get_claims(&self, token: &str) -> Result<Claims>;
}

/// HS256 access tokens shared with the account service.
pub struct Jwt {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Jwt {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, user_id: i32, lifetime: Duration) -> Result<String> {
        let now = Utc::now();

        let claims = Claims {
            token_type: ACCESS_TOKEN_TYPE.to_owned(),
            expires_at: (now + lifetime).timestamp(),
            issued_at: now.timestamp(),
            jti: Uuid::new_v4().simple().to_string(),
            user_id,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(
            |error| {
                error!("failed to encode token: {}", error);
                error::JWT_ISSUE_FAILED
            },
        )
    }
}

static VALIDATION: Lazy<Validation> = Lazy::new(|| {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 5;

    validation
});

impl JwtTrait for Jwt {
    fn get_claims(&self, token: &str) -> Result<Claims> {
        let claims = match jsonwebtoken::decode::<Claims>(token, &self.decoding, &VALIDATION) {
            Ok(decoded) => decoded.claims,
            Err(error) => {
                warn!(%error, "tried invalid token");
                return Err(error::JWT_INVALID_TOKEN);
            }
        };

        if claims.token_type != ACCESS_TOKEN_TYPE {
            warn!(token_type = %claims.token_type, "tried non-access token");
            return Err(error::JWT_INVALID_TOKEN);
        }

        Ok(claims)
    }
}
