// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, UserId, UserName};
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether the account was created no earlier than `window` before `now`.
    pub fn created_within(&self, window: Duration, now: DateTime<Utc>) -> bool {
        self.created_at >= now - window && self.created_at <= now
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: UserName,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        name: UserName,
        email: Email,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name,
            email,
            password_hash,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_created_at(created_at: DateTime<Utc>) -> User {
        User {
            id: UserId::new(1).unwrap(),
            name: UserName::new("A").unwrap(),
            email: Email::new("a@x.com").unwrap(),
            password_hash: PasswordHash::new("hash").unwrap(),
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn created_within_window_boundaries() {
        let now = Utc::now();
        let window = Duration::seconds(5);

        assert!(user_created_at(now).created_within(window, now));
        assert!(user_created_at(now - Duration::seconds(5)).created_within(window, now));
        assert!(!user_created_at(now - Duration::seconds(6)).created_within(window, now));
    }
}
