use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

// SQLite reports unique violations as "UNIQUE constraint failed: <table>.<column>"
const SLUG_COLUMNS: [&str; 3] = ["posts.slug", "categories.slug", "tags.slug"];
const SUBSCRIBER_EMAIL: &str = "subscribers.email";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    if SLUG_COLUMNS.iter().any(|column| message.contains(column)) {
                        DomainError::SlugConflict("slug already exists".into())
                    } else if message.contains(SUBSCRIBER_EMAIL) {
                        DomainError::Conflict("email already subscribed".into())
                    } else {
                        DomainError::Conflict("unique constraint violated".into())
                    }
                }
                ErrorKind::ForeignKeyViolation => {
                    DomainError::NotFound("referenced record not found".into())
                }
                ErrorKind::CheckViolation => {
                    DomainError::Validation("check constraint violated".into())
                }
                _ => DomainError::Persistence(message.to_string()),
            }
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
