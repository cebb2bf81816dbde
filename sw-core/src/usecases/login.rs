use super::prelude::*;

pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Verifies a username/password combination against the user store.
///
/// The error kind is decided here, at the boundary of the credential
/// verifier, so that callers never have to inspect error messages.
pub fn verify_login<R>(repo: &R, credentials: &Credentials) -> Result<User>
where
    R: UserRepo + ?Sized,
{
    if !validate::is_valid_username(credentials.username) {
        return Err(Error::UserName);
    }
    let Some(user) = repo.try_get_user_by_name(credentials.username)? else {
        return Err(Error::UserDoesNotExist);
    };
    if !user.password.verify(credentials.password) {
        return Err(Error::Credentials);
    }
    Ok(user)
}
