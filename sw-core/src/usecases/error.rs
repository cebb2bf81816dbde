use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid username")]
    UserName,
    #[error("Invalid username/password combination")]
    Credentials,
    #[error("Invalid password")]
    Password,
    #[error("Invalid e-mail address")]
    Email,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<sw_entities::password::ParseError> for Error {
    fn from(_: sw_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<sw_entities::email::EmailAddressParseError> for Error {
    fn from(_: sw_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}
