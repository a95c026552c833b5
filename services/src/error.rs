use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("database error: {0}")]
    Db(#[from] DbErr),

    #[error("{0} not found")]
    NotFound(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
