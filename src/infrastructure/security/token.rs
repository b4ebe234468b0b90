// src/infrastructure/security/token.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthTokenDto, AuthenticatedUser, TokenSubject, auth::TOKEN_TYPE},
        error::{ApplicationError, ApplicationResult},
        ports::{security::TokenManager, time::Clock},
    },
    domain::user::UserId,
};
use async_trait::async_trait;
use chrono::{DateTime, Duration};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    iat: i64,
    exp: i64,
    jti: String,
}

/// HS256 bearer tokens. Expiry is checked against the injected clock.
#[derive(Clone)]
pub struct JwtTokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    refresh_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl JwtTokenManager {
    pub fn new(
        secret: &str,
        ttl: Duration,
        refresh_ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> ApplicationResult<Self> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(ApplicationError::infrastructure(format!(
                "JWT secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
            refresh_ttl,
            clock,
        })
    }

    fn decode_claims(&self, token: &str) -> ApplicationResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| ApplicationError::unauthorized("Token is invalid"))
    }

    fn to_authenticated(&self, claims: Claims) -> ApplicationResult<AuthenticatedUser> {
        let invalid = || ApplicationError::unauthorized("Token is invalid");
        let id = claims
            .sub
            .parse::<i64>()
            .ok()
            .and_then(|id| UserId::new(id).ok())
            .ok_or_else(invalid)?;
        let issued_at = DateTime::from_timestamp(claims.iat, 0).ok_or_else(invalid)?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or_else(invalid)?;
        Ok(AuthenticatedUser {
            id,
            email: claims.email,
            token_id: claims.jti,
            issued_at,
            expires_at,
            refresh_expires_at: issued_at + self.refresh_ttl,
        })
    }
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = self.clock.now();
        let expires_at = issued_at + self.ttl;
        let claims = Claims {
            sub: i64::from(subject.user_id).to_string(),
            email: subject.email,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };
        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(AuthTokenDto {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: self.ttl.num_seconds(),
            issued_at,
            expires_at,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self.to_authenticated(self.decode_claims(token)?)?;
        if user.expires_at <= self.clock.now() {
            return Err(ApplicationError::unauthorized("Token has expired"));
        }
        Ok(user)
    }

    async fn authenticate_for_refresh(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self.to_authenticated(self.decode_claims(token)?)?;
        if user.refresh_expires_at <= self.clock.now() {
            return Err(ApplicationError::unauthorized(
                "Token can no longer be refreshed",
            ));
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    struct StepClock(Mutex<DateTime<Utc>>);

    impl StepClock {
        fn advance(&self, by: Duration) {
            let mut now = self.0.lock().unwrap();
            *now += by;
        }
    }

    impl Clock for StepClock {
        fn now(&self) -> DateTime<Utc> {
            *self.0.lock().unwrap()
        }
    }

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn manager() -> (JwtTokenManager, Arc<StepClock>) {
        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let clock = Arc::new(StepClock(Mutex::new(start)));
        let manager = JwtTokenManager::new(
            SECRET,
            Duration::minutes(60),
            Duration::minutes(120),
            clock.clone(),
        )
        .unwrap();
        (manager, clock)
    }

    fn subject() -> TokenSubject {
        TokenSubject {
            user_id: UserId::new(7).unwrap(),
            email: "a@x.com".into(),
        }
    }

    #[test]
    fn short_secrets_are_rejected() {
        let clock: Arc<dyn Clock> = manager().1;
        assert!(
            JwtTokenManager::new("short", Duration::minutes(1), Duration::minutes(2), clock)
                .is_err()
        );
    }

    #[tokio::test]
    async fn issued_token_authenticates() {
        let (manager, _) = manager();
        let token = manager.issue(subject()).await.unwrap();
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.expires_in, 3600);

        let user = manager.authenticate(&token.access_token).await.unwrap();
        assert_eq!(user.id, UserId::new(7).unwrap());
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.refresh_expires_at - user.issued_at, Duration::minutes(120));
    }

    #[tokio::test]
    async fn expired_token_still_refreshes_inside_window() {
        let (manager, clock) = manager();
        let token = manager.issue(subject()).await.unwrap();
        clock.advance(Duration::minutes(90));

        let err = manager.authenticate(&token.access_token).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
        assert!(manager.authenticate_for_refresh(&token.access_token).await.is_ok());

        clock.advance(Duration::minutes(31));
        assert!(manager.authenticate_for_refresh(&token.access_token).await.is_err());
    }

    #[tokio::test]
    async fn tampered_token_is_rejected() {
        let (manager, _) = manager();
        let token = manager.issue(subject()).await.unwrap();
        let mut tampered = token.access_token.clone();
        tampered.push('x');
        assert!(manager.authenticate(&tampered).await.is_err());
    }
}
