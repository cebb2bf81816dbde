use rocket::http::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

use crate::core::error::AppError;

pub const COOKIE_CSRF_KEY: &str = "csrf";

/// Returns the anti-forgery token bound to this session, creating
/// it on demand. Pages embed the token as a hidden form field.
pub fn issue(cookies: &CookieJar<'_>) -> String {
    if let Some(cookie) = cookies.get_private(COOKIE_CSRF_KEY) {
        return cookie.value().to_owned();
    }
    let token = Uuid::new_v4().as_simple().to_string();
    cookies.add_private(
        Cookie::build((COOKIE_CSRF_KEY, token.clone()))
            .http_only(true)
            .same_site(SameSite::Lax),
    );
    token
}

/// Compares a submitted token against the session cookie.
pub fn verify(cookies: &CookieJar<'_>, submitted: &str) -> Result<(), AppError> {
    let Some(cookie) = cookies.get_private(COOKIE_CSRF_KEY) else {
        return Err(AppError::Csrf);
    };
    if !submitted.is_empty() && cookie.value() == submitted {
        Ok(())
    } else {
        Err(AppError::Csrf)
    }
}
