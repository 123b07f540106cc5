//! Database module: store, entity views and errors.
//!
//! - `repo`: the [`Store`] and its SQL, one method per operation.
//! - `model`: view models returned by join queries.
//! - `error`: [`StoreError`] and the crate's storage `Result`.
//!
//! External modules should import from `tg_feedstore::db`.

pub mod error;
pub mod model;
pub mod repo;

pub use error::{Result, StoreError};
pub use model::{BookmarkView, ChannelLink, Subscriber};
pub use repo::{init_pool, prepare_sqlite_url, Clock, Pool, SqliteTarget, Store, SCHEMA};
