//! Classification of PostgreSQL constraint failures surfaced through sqlx.

use sqlx::error::ErrorKind;
use sqlx::postgres::PgDatabaseError;

/// A database-enforced rule that rejected a write, carrying the constraint
/// (or column, for not-null) name reported by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    Unique(String),
    NotNull(String),
    Check(String),
    ForeignKey(String),
}

pub fn classify(err: &sqlx::Error) -> Option<ConstraintViolation> {
    let db_err = err.as_database_error()?;
    let name = db_err.constraint().unwrap_or("unknown").to_string();

    match db_err.kind() {
        ErrorKind::UniqueViolation => Some(ConstraintViolation::Unique(name)),
        ErrorKind::CheckViolation => Some(ConstraintViolation::Check(name)),
        ErrorKind::ForeignKeyViolation => Some(ConstraintViolation::ForeignKey(name)),
        ErrorKind::NotNullViolation => {
            let column = db_err
                .try_downcast_ref::<PgDatabaseError>()
                .and_then(|pg| pg.column())
                .map(str::to_string)
                .unwrap_or(name);
            Some(ConstraintViolation::NotNull(column))
        }
        _ => None,
    }
}

/// True when `err` is a unique violation of exactly `constraint`.
pub fn is_unique_violation_of(err: &sqlx::Error, constraint: &str) -> bool {
    matches!(classify(err), Some(ConstraintViolation::Unique(name)) if name == constraint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_unclassified() {
        assert_eq!(classify(&sqlx::Error::RowNotFound), None);
        assert!(!is_unique_violation_of(&sqlx::Error::PoolClosed, "jobs_slug_key"));
    }
}
