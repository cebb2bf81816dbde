use super::prelude::*;

pub struct NewUser<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub email: Option<&'a str>,
}

pub fn create_new_user<R>(repo: &R, new_user: &NewUser) -> Result<User>
where
    R: UserRepo + ?Sized,
{
    if !validate::is_valid_username(new_user.username) {
        return Err(Error::UserName);
    }
    let password = new_user.password.parse::<Password>()?;
    let email = new_user
        .email
        .filter(|email| !email.trim().is_empty())
        .map(|email| email.parse::<EmailAddress>())
        .transpose()?;
    if repo.try_get_user_by_name(new_user.username)?.is_some() {
        return Err(Error::UserExists);
    }
    log::debug!("Creating new user: {}", new_user.username);
    let user = User {
        id: Id::new(),
        name: new_user.username.to_owned(),
        email,
        password,
        created_at: Timestamp::now(),
        deletion_requested_at: None,
    };
    repo.create_user(&user)?;
    Ok(user)
}
