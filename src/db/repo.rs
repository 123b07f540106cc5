use super::error::{Result, StoreError};
use super::model::{BookmarkView, ChannelLink, Subscriber};
use crate::model::{NewUser, User, UrlUpdate, UserUpdate, WebResource};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::{Executor, FromRow, QueryBuilder, Row, Sqlite, SqlitePool, Transaction};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

pub type Pool = SqlitePool;

/// Source of "now" used to stamp `web.last_updated`.
pub type Clock = fn() -> DateTime<Utc>;

/// Schema applied when the backing database is created.
pub const SCHEMA: &str = include_str!("../../resources/setup.sql");

const USER_COLUMNS: &str =
    "telegram_id, username, firstname, lastname, language_code, is_bot, is_active";

/// A normalized SQLite URL plus the file it points at (`None` for in-memory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteTarget {
    pub url: String,
    pub file: Option<PathBuf>,
}

impl SqliteTarget {
    /// True when no database exists yet at this target.
    pub fn is_fresh(&self) -> bool {
        match &self.file {
            Some(path) => !path.exists(),
            None => true,
        }
    }
}

/// If using a file-backed SQLite URL, expand a leading `~/` and ensure the parent
/// directory exists. Leaves in-memory URLs untouched.
pub fn prepare_sqlite_url(url: &str) -> std::io::Result<SqliteTarget> {
    let passthrough = |file: Option<PathBuf>| {
        Ok(SqliteTarget {
            url: url.to_string(),
            file,
        })
    };

    if !url.starts_with("sqlite:") {
        return passthrough(None);
    }

    // sqlite::memory: or sqlite::memory:?cache=shared
    if url.starts_with("sqlite::memory") {
        return passthrough(None);
    }

    let rest = &url["sqlite:".len()..];
    let path_with_query = rest.strip_prefix("//").unwrap_or(rest);

    let (path_part, query_part) = match path_with_query.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (path_with_query, None),
    };

    if path_part.is_empty() {
        return passthrough(None);
    }

    let expanded_path = expand_home(path_part);

    if let Some(parent) = std::path::Path::new(&expanded_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // Rebuild URL, prefer sqlite:// form
    let mut rebuilt = String::from("sqlite://");
    rebuilt.push_str(&expanded_path);
    if let Some(q) = query_part {
        rebuilt.push('?');
        rebuilt.push_str(q);
    }
    Ok(SqliteTarget {
        url: rebuilt,
        file: Some(PathBuf::from(expanded_path)),
    })
}

/// Remove a database file together with its WAL and shared-memory siblings.
fn remove_database_files(path: &Path) -> std::io::Result<()> {
    let mut wal = path.as_os_str().to_owned();
    wal.push("-wal");
    let mut shm = path.as_os_str().to_owned();
    shm.push("-shm");
    for file in [path.to_path_buf(), PathBuf::from(wal), PathBuf::from(shm)] {
        match std::fs::remove_file(&file) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

pub(crate) fn expand_home(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            return format!("{}/{}", home.trim_end_matches('/'), rest);
        }
    }
    path.to_string()
}

pub async fn init_pool(target: &SqliteTarget) -> Result<Pool> {
    let options = SqliteConnectOptions::from_str(&target.url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Full);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    Ok(pool)
}

/// Persistence for users, bookmarks, web resources and channels.
///
/// Every method is atomic on its own: operations touching more than one table
/// run inside a single transaction. Nothing spans calls.
#[derive(Debug, Clone)]
pub struct Store {
    pool: Pool,
    clock: Clock,
}

impl Store {
    /// Open the database at `database_url`, creating it with the bundled
    /// schema if it does not exist yet.
    pub async fn connect(database_url: &str) -> Result<Self> {
        Self::connect_with_schema(database_url, SCHEMA).await
    }

    /// Like [`Store::connect`], but a fresh database is initialized with
    /// `schema` instead of the bundled script.
    #[instrument(skip(schema))]
    pub async fn connect_with_schema(database_url: &str, schema: &str) -> Result<Self> {
        let target = prepare_sqlite_url(database_url)
            .map_err(|err| StoreError::Connection(sqlx::Error::Io(err)))?;
        // Must be checked before connecting: connecting creates the file.
        let fresh = target.is_fresh();
        let pool = init_pool(&target).await?;
        if fresh {
            if let Err(err) = apply_schema(&pool, schema).await {
                pool.close().await;
                if let Some(path) = &target.file {
                    if let Err(cleanup) = remove_database_files(path) {
                        warn!(?cleanup, path = %path.display(), "failed to remove partial store");
                    }
                }
                return Err(err);
            }
            info!(url = %target.url, "initialized new store");
        } else {
            debug!(url = %target.url, "opened existing store");
        }
        Ok(Self {
            pool,
            clock: Utc::now,
        })
    }

    /// Like [`Store::connect_with_schema`], reading the schema script from
    /// `schema_path`.
    pub async fn connect_with_schema_file(database_url: &str, schema_path: &Path) -> Result<Self> {
        let schema = std::fs::read_to_string(schema_path)?;
        Self::connect_with_schema(database_url, &schema).await
    }

    /// Replace the clock used to stamp newly added urls.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub async fn close(self) {
        self.pool.close().await;
    }

    // ---- users ----

    #[instrument(skip_all, fields(telegram_id = user.telegram_id))]
    pub async fn add_user(&self, user: &NewUser) -> Result<()> {
        sqlx::query(
            "INSERT OR IGNORE INTO user (telegram_id, username, firstname, lastname, language_code, is_bot, is_active) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(user.telegram_id)
        .bind(user.username.as_deref())
        .bind(user.firstname.as_deref())
        .bind(user.lastname.as_deref())
        .bind(user.language_code.as_deref())
        .bind(user.is_bot)
        .bind(user.is_active)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn remove_user(&self, telegram_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM user WHERE telegram_id = ?")
            .bind(telegram_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[instrument(skip(self, update))]
    pub async fn update_user(&self, telegram_id: i64, update: &UserUpdate) -> Result<()> {
        if update.is_empty() {
            return Err(StoreError::MalformedQuery("empty user update"));
        }
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE user SET ");
        let mut set = qb.separated(", ");
        if let Some(v) = &update.username {
            set.push("username = ").push_bind_unseparated(v.as_str());
        }
        if let Some(v) = &update.firstname {
            set.push("firstname = ").push_bind_unseparated(v.as_str());
        }
        if let Some(v) = &update.lastname {
            set.push("lastname = ").push_bind_unseparated(v.as_str());
        }
        if let Some(v) = &update.language_code {
            set.push("language_code = ").push_bind_unseparated(v.as_str());
        }
        if let Some(v) = update.is_bot {
            set.push("is_bot = ").push_bind_unseparated(v);
        }
        if let Some(v) = update.is_active {
            set.push("is_active = ").push_bind_unseparated(v);
        }
        qb.push(" WHERE telegram_id = ").push_bind(telegram_id);
        qb.build().execute(&self.pool).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, telegram_id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM user WHERE telegram_id = ?"
        ))
        .bind(telegram_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    // ---- urls ----

    #[instrument(skip(self))]
    pub async fn add_url(&self, url: &str) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        insert_url_tx(&mut tx, url, (self.clock)()).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Drop every bookmark on `url`, then every url no bookmark or channel
    /// still uses.
    #[instrument(skip(self))]
    pub async fn remove_url(&self, url: &str) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        let removed = sqlx::query("DELETE FROM web_user WHERE url = ?")
            .bind(url)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        prune_orphans_tx(&mut tx).await?;
        tx.commit().await?;
        debug!(bookmarks = removed, "removed url");
        Ok(())
    }

    #[instrument(skip(self, update))]
    pub async fn update_url(&self, url: &str, update: &UrlUpdate) -> Result<()> {
        if update.is_empty() {
            return Err(StoreError::MalformedQuery("empty url update"));
        }
        sqlx::query("UPDATE web SET last_updated = COALESCE(?, last_updated) WHERE url = ?")
            .bind(update.last_updated)
            .bind(url)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_url(&self, url: &str) -> Result<Option<WebResource>> {
        let web = sqlx::query_as::<_, WebResource>(
            "SELECT url, last_updated FROM web WHERE url = ?",
        )
        .bind(url)
        .fetch_optional(&self.pool)
        .await?;
        Ok(web)
    }

    #[instrument(skip_all)]
    pub async fn get_all_urls(&self) -> Result<Vec<WebResource>> {
        let rows =
            sqlx::query_as::<_, WebResource>("SELECT url, last_updated FROM web ORDER BY url")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    /// Delete every web row that no bookmark and no channel references,
    /// including urls added directly with [`Store::add_url`].
    #[instrument(skip_all)]
    pub async fn prune_orphans(&self) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let removed = prune_orphans_tx(&mut tx).await?;
        tx.commit().await?;
        info!(removed, "pruned orphaned urls");
        Ok(removed)
    }

    // ---- bookmarks ----

    #[instrument(skip(self))]
    pub async fn add_bookmark(&self, telegram_id: i64, url: &str, alias: &str) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        insert_url_tx(&mut tx, url, (self.clock)()).await?;
        sqlx::query("INSERT OR IGNORE INTO web_user (url, telegram_id, alias) VALUES (?, ?, ?)")
            .bind(url)
            .bind(telegram_id)
            .bind(alias)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn remove_bookmark(&self, telegram_id: i64, url: &str) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM web_user WHERE telegram_id = ? AND url = ?")
            .bind(telegram_id)
            .bind(url)
            .execute(&mut *tx)
            .await?;
        prune_orphans_tx(&mut tx).await?;
        tx.commit().await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn update_bookmark(&self, telegram_id: i64, url: &str, alias: &str) -> Result<()> {
        sqlx::query("UPDATE web_user SET alias = ? WHERE telegram_id = ? AND url = ?")
            .bind(alias)
            .bind(telegram_id)
            .bind(url)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_bookmark(&self, telegram_id: i64, alias: &str) -> Result<Option<BookmarkView>> {
        let row = sqlx::query_as::<_, BookmarkView>(
            "SELECT web.url, web_user.alias, web.last_updated \
             FROM web JOIN web_user ON web_user.url = web.url \
             WHERE web_user.telegram_id = ? AND web_user.alias = ? \
             ORDER BY web.url LIMIT 1",
        )
        .bind(telegram_id)
        .bind(alias)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    #[instrument(skip(self))]
    pub async fn get_bookmarks_for_user(&self, telegram_id: i64) -> Result<Vec<BookmarkView>> {
        let rows = sqlx::query_as::<_, BookmarkView>(
            "SELECT web.url, web_user.alias, web.last_updated \
             FROM web JOIN web_user ON web_user.url = web.url \
             WHERE web_user.telegram_id = ? \
             ORDER BY web_user.alias, web.url",
        )
        .bind(telegram_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    #[instrument(skip(self))]
    pub async fn get_users_for_url(&self, url: &str) -> Result<Vec<Subscriber>> {
        let rows = sqlx::query(
            "SELECT user.telegram_id, user.username, user.firstname, user.lastname, \
                    user.language_code, user.is_bot, user.is_active, web_user.alias \
             FROM user JOIN web_user ON web_user.telegram_id = user.telegram_id \
             WHERE web_user.url = ? \
             ORDER BY user.telegram_id",
        )
        .bind(url)
        .fetch_all(&self.pool)
        .await?;

        let subscribers = rows
            .iter()
            .map(|row| {
                Ok(Subscriber {
                    user: User::from_row(row)?,
                    alias: row.try_get("alias")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()?;
        Ok(subscribers)
    }

    // ---- channels ----

    /// Bind `channel_name` to `url`. Binding the same pair twice keeps one row.
    #[instrument(skip(self))]
    pub async fn add_channel(&self, channel_name: &str, url: &str) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        insert_url_tx(&mut tx, url, (self.clock)()).await?;
        sqlx::query(
            "INSERT OR IGNORE INTO web_channel (url, channel_name, alias) VALUES (?, ?, '')",
        )
        .bind(url)
        .bind(channel_name)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn remove_channel(&self, channel_name: &str, url: &str) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM web_channel WHERE channel_name = ? AND url = ?")
            .bind(channel_name)
            .bind(url)
            .execute(&mut *tx)
            .await?;
        prune_orphans_tx(&mut tx).await?;
        tx.commit().await?;
        Ok(())
    }

    #[instrument(skip_all)]
    pub async fn get_channels(&self) -> Result<Vec<ChannelLink>> {
        let rows = sqlx::query_as::<_, ChannelLink>(
            "SELECT channel_name, url FROM web_channel ORDER BY channel_name, url",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    #[instrument(skip(self))]
    pub async fn get_channels_for_url(&self, url: &str) -> Result<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar(
            "SELECT channel_name FROM web_channel WHERE url = ? ORDER BY channel_name",
        )
        .bind(url)
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }
}

async fn insert_url_tx(
    tx: &mut Transaction<'_, Sqlite>,
    url: &str,
    now: DateTime<Utc>,
) -> Result<()> {
    sqlx::query("INSERT OR IGNORE INTO web (url, last_updated) VALUES (?, ?)")
        .bind(url)
        .bind(now)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

/// Delete every web row that no bookmark and no channel references.
async fn prune_orphans_tx(tx: &mut Transaction<'_, Sqlite>) -> Result<u64> {
    let removed = sqlx::query(
        "DELETE FROM web \
         WHERE url NOT IN (SELECT url FROM web_user) \
         AND url NOT IN (SELECT url FROM web_channel)",
    )
    .execute(&mut **tx)
    .await?
    .rows_affected();
    if removed > 0 {
        debug!(removed, "removed orphaned urls");
    }
    Ok(removed)
}

/// Run `schema` in one transaction so a failing script leaves nothing behind.
async fn apply_schema(pool: &Pool, schema: &str) -> Result<()> {
    let mut tx = pool.begin().await?;
    (&mut *tx).execute(schema).await?;
    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    async fn setup_store() -> Store {
        Store::connect("sqlite::memory:").await.unwrap()
    }

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn alice() -> NewUser {
        NewUser {
            telegram_id: 1,
            username: Some("alice".into()),
            firstname: Some("Alice".into()),
            lastname: Some("Liddell".into()),
            language_code: Some("en".into()),
            is_bot: false,
            is_active: true,
        }
    }

    #[test]
    fn prepare_url_keeps_memory_and_finds_file() {
        let t = prepare_sqlite_url("sqlite::memory:").unwrap();
        assert_eq!(t.url, "sqlite::memory:");
        assert!(t.file.is_none());
        assert!(t.is_fresh());

        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("nested").join("bot.db");
        let t = prepare_sqlite_url(&format!("sqlite://{}?mode=rwc", db.display())).unwrap();
        assert_eq!(t.file.as_deref(), Some(db.as_path()));
        assert!(t.url.ends_with("?mode=rwc"));
        assert!(db.parent().unwrap().exists());
        assert!(t.is_fresh());
    }

    #[test]
    fn prepare_url_reports_unusable_parent() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let url = format!("sqlite://{}", blocker.join("bot.db").display());
        assert!(prepare_sqlite_url(&url).is_err());
    }

    #[tokio::test]
    async fn test_unusable_parent_is_storage_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        let url = format!("sqlite://{}", blocker.join("bot.db").display());
        let err = Store::connect(&url).await.unwrap_err();
        assert!(matches!(err, StoreError::Connection(sqlx::Error::Io(_))));
    }

    #[tokio::test]
    async fn test_user_insert_if_absent() {
        let store = setup_store().await;
        store.add_user(&alice()).await.unwrap();

        let mut other = alice();
        other.username = Some("mallory".into());
        store.add_user(&other).await.unwrap();

        let user = store.get_user(1).await.unwrap().unwrap();
        assert_eq!(user.username.as_deref(), Some("alice"));
        let cnt: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(cnt, 1);
    }

    #[tokio::test]
    async fn test_update_user_partial() {
        let store = setup_store().await;
        store.add_user(&alice()).await.unwrap();

        let update = UserUpdate {
            is_active: Some(false),
            ..Default::default()
        };
        store.update_user(1, &update).await.unwrap();

        let user = store.get_user(1).await.unwrap().unwrap();
        assert!(!user.is_active);
        assert_eq!(user.username.as_deref(), Some("alice"));
        assert_eq!(user.lastname.as_deref(), Some("Liddell"));
        assert_eq!(user.language_code.as_deref(), Some("en"));

        let update = UserUpdate {
            language_code: Some("de".into()),
            firstname: Some("Alicia".into()),
            ..Default::default()
        };
        store.update_user(1, &update).await.unwrap();
        let user = store.get_user(1).await.unwrap().unwrap();
        assert_eq!(user.language_code.as_deref(), Some("de"));
        assert_eq!(user.firstname.as_deref(), Some("Alicia"));
        assert!(!user.is_active);
    }

    #[tokio::test]
    async fn test_empty_updates_rejected() {
        let store = setup_store().await;
        store.add_user(&alice()).await.unwrap();
        let err = store
            .update_user(1, &UserUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::MalformedQuery(_)));

        let err = store
            .update_url("http://a", &UrlUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::MalformedQuery(_)));
    }

    #[tokio::test]
    async fn test_add_url_uses_clock() {
        let store = setup_store().await.with_clock(fixed_clock);
        store.add_url("http://a").await.unwrap();
        let web = store.get_url("http://a").await.unwrap().unwrap();
        assert_eq!(web.last_updated, fixed_clock());

        // Duplicate keeps the first stamp.
        let store = store.with_clock(Utc::now);
        store.add_url("http://a").await.unwrap();
        let web = store.get_url("http://a").await.unwrap().unwrap();
        assert_eq!(web.last_updated, fixed_clock());
    }

    #[tokio::test]
    async fn test_update_url() {
        let store = setup_store().await.with_clock(fixed_clock);
        store.add_url("http://a").await.unwrap();
        let later = Utc.with_ymd_and_hms(2024, 4, 1, 8, 30, 0).unwrap();
        store
            .update_url(
                "http://a",
                &UrlUpdate {
                    last_updated: Some(later),
                },
            )
            .await
            .unwrap();
        let web = store.get_url("http://a").await.unwrap().unwrap();
        assert_eq!(web.last_updated, later);
    }

    #[tokio::test]
    async fn test_bookmark_lifecycle() {
        let store = setup_store().await;
        store.add_user(&alice()).await.unwrap();
        store.add_bookmark(1, "http://a", "x").await.unwrap();

        let bm = store.get_bookmark(1, "x").await.unwrap().unwrap();
        assert_eq!(bm.url, "http://a");
        assert_eq!(bm.alias, "x");

        store.update_bookmark(1, "http://a", "y").await.unwrap();
        assert!(store.get_bookmark(1, "x").await.unwrap().is_none());
        assert!(store.get_bookmark(1, "y").await.unwrap().is_some());

        store.remove_bookmark(1, "http://a").await.unwrap();
        assert!(store.get_bookmark(1, "y").await.unwrap().is_none());
        assert!(store.get_url("http://a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_url_keeps_channel_backed_row() {
        let store = setup_store().await;
        store.add_bookmark(1, "http://a", "x").await.unwrap();
        store.add_bookmark(2, "http://a", "z").await.unwrap();
        store.add_channel("@news", "http://a").await.unwrap();

        store.remove_url("http://a").await.unwrap();
        assert!(store.get_bookmarks_for_user(1).await.unwrap().is_empty());
        assert!(store.get_bookmarks_for_user(2).await.unwrap().is_empty());
        assert!(store.get_url("http://a").await.unwrap().is_some());

        store.remove_channel("@news", "http://a").await.unwrap();
        assert!(store.get_url("http://a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_prune_orphans() {
        let store = setup_store().await;
        store.add_url("http://lonely").await.unwrap();
        store.add_bookmark(1, "http://kept", "k").await.unwrap();

        assert_eq!(store.prune_orphans().await.unwrap(), 1);
        let urls: Vec<String> = store
            .get_all_urls()
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.url)
            .collect();
        assert_eq!(urls, vec!["http://kept".to_string()]);
    }
}
