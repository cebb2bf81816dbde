use rocket::{
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;

use sw_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid CSRF token")]
    Csrf,
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl<'r, 'o: 'r> Responder<'r, 'o> for AppError {
    fn respond_to(self, _: &rocket::Request) -> response::Result<'o> {
        match self {
            AppError::Csrf => Err(Status::Forbidden),
            AppError::Parameter(ParameterError::Credentials) => Err(Status::Unauthorized),
            AppError::Repo(RepoError::NotFound) => Err(Status::NotFound),
            err => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}
