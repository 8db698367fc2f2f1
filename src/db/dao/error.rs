use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DaoLayerError {
    #[error("Database error: {0}")]
    Db(DbErr),
    #[error("{entity} not found ({key})")]
    NotFound { entity: &'static str, key: String },
    #[error("Foreign key constraint violated: {detail}")]
    ConstraintViolation { detail: String },
    #[error("Invalid {entity}: {reason}")]
    Invalid { entity: &'static str, reason: String },
    #[error("Invalid pagination: page={page} page_size={page_size}")]
    InvalidPagination { page: u64, page_size: u64 },
}

pub type DaoResult<T> = Result<T, DaoLayerError>;

impl DaoLayerError {
    pub fn not_found(entity: &'static str, key: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn invalid(entity: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            entity,
            reason: reason.into(),
        }
    }
}

impl From<DbErr> for DaoLayerError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                DaoLayerError::ConstraintViolation { detail }
            }
            _ => DaoLayerError::Db(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use super::DaoLayerError;

    #[test]
    fn plain_db_errors_stay_db_errors() {
        let err = DaoLayerError::from(DbErr::Custom("boom".to_string()));
        assert!(matches!(err, DaoLayerError::Db(_)));
        let message = err.to_string();
        assert!(message.starts_with("Database error:"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn not_found_names_entity_and_key() {
        let err = DaoLayerError::not_found("towns", "name=Seattle");
        assert_eq!(err.to_string(), "towns not found (name=Seattle)");
    }
}
