use maud::Markup;
use rocket::{
    self,
    form::Form,
    get,
    http::{Cookie, CookieJar, SameSite},
    post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm, State,
};

use super::view;
use crate::{
    core::prelude::*,
    web::{guards::*, store::Store, Cfg},
};
use sw_core::usecases::Error as ParameterError;

#[derive(FromForm)]
pub struct LoginCredentials<'r> {
    pub(crate) username: &'r str,
    pub(crate) password: &'r str,
}

#[allow(clippy::result_large_err)]
#[get("/login")]
pub fn get_login(
    account: Option<Account>,
    flash: Option<FlashMessage>,
) -> std::result::Result<Markup, Redirect> {
    if account.is_some() {
        Err(Redirect::to(uri!(super::get_index)))
    } else {
        Ok(view::login(flash))
    }
}

#[allow(clippy::result_large_err)]
#[post("/login", data = "<credentials>")]
pub fn post_login(
    store: Store,
    cfg: &State<Cfg>,
    credentials: Form<LoginCredentials>,
    cookies: &CookieJar<'_>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let login = usecases::Credentials {
        username: credentials.username,
        password: credentials.password,
    };
    match usecases::verify_login(&*store, &login) {
        Err(err) => {
            let msg = match err {
                ParameterError::UserDoesNotExist
                | ParameterError::UserName
                | ParameterError::Credentials => "Invalid username or password.",
                _ => "We are so sorry! An internal server error has occurred. Please try again later.",
            };
            Err(Flash::error(Redirect::to(uri!(get_login)), msg))
        }
        Ok(user) => {
            cookies.add_private(
                Cookie::build((COOKIE_AUTH_KEY, user.name))
                    .domain(cfg.root_domain.clone())
                    .http_only(true)
                    .same_site(SameSite::Lax),
            );
            Ok(Redirect::to(uri!(super::get_index)))
        }
    }
}

#[post("/logout")]
pub fn post_logout(cfg: &State<Cfg>, cookies: &CookieJar<'_>) -> Flash<Redirect> {
    cookies.remove_private(Cookie::build(COOKIE_AUTH_KEY).domain(cfg.root_domain.clone()));
    Flash::success(
        Redirect::to(uri!(super::get_index)),
        "You have successfully logged out.",
    )
}
