use crate::config::Config;

pub type TpResult<T> = Result<T, TpError>;

#[derive(Debug, thiserror::Error)]
pub enum TpError {
    #[error("[HTTP Request Error] {0}")]
    HttpRequestError(#[from] ::reqwest::Error),

    #[error("[HTTP Middleware Error] {0}")]
    HttpMiddlewareError(#[from] ::reqwest_middleware::Error),

    #[error("[HTTP Status Error] [{request}] {status}")]
    HttpStatusError { status: String, request: String },

    #[error("[Invalid] {message}")]
    Invalid { code: &'static str, message: String },

    #[error("[Lock Error] {0}")]
    LockError(String),

    #[error("[No Data] {message}")]
    NoData { code: &'static str, message: String },

    #[error("[Parse Config Error] {0}")]
    ParseConfigError(#[from] ::confy::ConfyError),

    #[error("[Parse URL Error] {0}")]
    ParseUrlError(#[from] url::ParseError),

    #[error("[Serde JSON Error] {0}")]
    SerdeJsonError(#[from] ::serde_json::Error),
}

impl From<std::sync::PoisonError<std::sync::RwLockReadGuard<'_, Config>>> for TpError {
    fn from(err: std::sync::PoisonError<std::sync::RwLockReadGuard<'_, Config>>) -> Self {
        Self::LockError(err.to_string())
    }
}

impl From<std::sync::PoisonError<std::sync::RwLockWriteGuard<'_, Config>>> for TpError {
    fn from(err: std::sync::PoisonError<std::sync::RwLockWriteGuard<'_, Config>>) -> Self {
        Self::LockError(err.to_string())
    }
}
