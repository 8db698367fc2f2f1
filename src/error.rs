use crate::db::dao::DaoLayerError;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    ConstraintViolation(String),
    Validation(String),
    Internal(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn constraint_violation(message: impl Into<String>) -> Self {
        Self::ConstraintViolation(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(message)
            | Self::ConstraintViolation(message)
            | Self::Validation(message)
            | Self::Internal(message) => message.as_str(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not found",
            Self::ConstraintViolation(_) => "constraint violation",
            Self::Validation(_) => "validation error",
            Self::Internal(_) => "internal error",
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::NotFound { .. } => AppError::not_found(err.to_string()),
            DaoLayerError::ConstraintViolation { .. } => {
                AppError::constraint_violation(err.to_string())
            }
            DaoLayerError::Invalid { .. } | DaoLayerError::InvalidPagination { .. } => {
                AppError::validation(err.to_string())
            }
            DaoLayerError::Db(_) => AppError::internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use crate::db::dao::DaoLayerError;

    #[test]
    fn maps_dao_errors_onto_the_taxonomy() {
        let not_found = AppError::from(DaoLayerError::not_found("towns", "id=9"));
        assert!(matches!(not_found, AppError::NotFound(_)));
        assert_eq!(not_found.message(), "towns not found (id=9)");

        let violation = AppError::from(DaoLayerError::ConstraintViolation {
            detail: "FOREIGN KEY constraint failed".to_string(),
        });
        assert!(matches!(violation, AppError::ConstraintViolation(_)));

        let invalid = AppError::from(DaoLayerError::invalid("employees", "salary must be >= 0"));
        assert!(matches!(invalid, AppError::Validation(_)));

        let paging = AppError::from(DaoLayerError::InvalidPagination {
            page: 0,
            page_size: 10,
        });
        assert_eq!(paging.to_string(), "validation error: Invalid pagination: page=0 page_size=10");
    }
}
