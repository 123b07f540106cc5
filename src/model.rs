use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Telegram user known to the bot, keyed by `telegram_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub language_code: Option<String>,
    pub is_bot: bool,
    pub is_active: bool,
}

/// Insert payload for [`User`], usually built from an incoming Telegram update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub language_code: Option<String>,
    pub is_bot: bool,
    pub is_active: bool,
}

impl NewUser {
    pub fn new(telegram_id: i64) -> Self {
        Self {
            telegram_id,
            username: None,
            firstname: None,
            lastname: None,
            language_code: None,
            is_bot: false,
            is_active: true,
        }
    }
}

/// Partial update of a user. Only `Some` fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub language_code: Option<String>,
    pub is_bot: Option<bool>,
    pub is_active: Option<bool>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.firstname.is_none()
            && self.lastname.is_none()
            && self.language_code.is_none()
            && self.is_bot.is_none()
            && self.is_active.is_none()
    }
}

/// A tracked URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct WebResource {
    pub url: String,
    pub last_updated: DateTime<Utc>,
}

/// Partial update of a web resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UrlUpdate {
    pub last_updated: Option<DateTime<Utc>>,
}

impl UrlUpdate {
    pub fn is_empty(&self) -> bool {
        self.last_updated.is_none()
    }
}
