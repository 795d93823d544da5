use actix_web::{http::StatusCode, ResponseError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] dietplan_model::Error),
    #[error("failed to render page: {0}")]
    Render(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Input(_) => StatusCode::BAD_REQUEST,
            Error::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
