use thiserror::Error;

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage failure: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("constraint violation: {0}")]
    ConstraintViolation(#[source] sqlx::Error),
    #[error("malformed query: {0}")]
    MalformedQuery(&'static str),
    #[error("failed to read schema script: {0}")]
    Schema(#[from] std::io::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let is_constraint = match &err {
            sqlx::Error::Database(db) => {
                db.is_unique_violation()
                    || db.is_foreign_key_violation()
                    || db.is_check_violation()
                    // SQLITE_CONSTRAINT_NOTNULL
                    || db.code().as_deref() == Some("1299")
            }
            _ => false,
        };
        if is_constraint {
            StoreError::ConstraintViolation(err)
        } else {
            StoreError::Connection(err)
        }
    }
}
