//! View models returned by join queries.
//!
//! Keep these structs focused on the data returned by queries. Business logic
//! should live in higher layers.

use crate::model::User;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A user's bookmark joined with its web resource.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, sqlx::FromRow)]
pub struct BookmarkView {
    pub url: String,
    pub alias: String,
    pub last_updated: DateTime<Utc>,
}

/// A user holding a bookmark on some url, with the alias they chose.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Subscriber {
    #[serde(flatten)]
    pub user: User,
    pub alias: String,
}

/// A channel bound to a url.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, sqlx::FromRow)]
pub struct ChannelLink {
    pub channel_name: String,
    pub url: String,
}
