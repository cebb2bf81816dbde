use std::net::IpAddr;

use maud::Markup;
use rocket::{
    self,
    form::Form,
    get,
    http::{Cookie, CookieJar},
    post, FromForm, State,
};

use super::view::{self, DeleteAccountFlags};
use crate::{
    core::{error::AppError, prelude::*},
    web::{csrf, guards::*, store::Store, Cfg},
};
use sw_core::{
    gateways::notify::NotificationEvent, usecases::Error as ParameterError,
};

type Result<T> = std::result::Result<T, AppError>;

#[derive(FromForm)]
pub struct DeleteAccountRequest<'r> {
    #[field(default = "")]
    csrf: &'r str,
    confirmed: bool,
    #[field(default = "")]
    username: &'r str,
    #[field(default = "")]
    password: &'r str,
}

#[get("/account/delete")]
pub fn get_delete_account(account: Option<Account>, cookies: &CookieJar<'_>) -> Markup {
    let csrf_token = csrf::issue(cookies);
    view::account_delete(
        account.as_ref().map(Account::name),
        &csrf_token,
        &DeleteAccountFlags::default(),
    )
}

/// Handles the confirmation form of the deletion page.
///
/// Credentials are re-checked even for a logged-in session so that a
/// stolen cookie alone cannot delete an account. Once the request has
/// been accepted, the response always logs the session out and shows
/// the terminal page, whether or not every side effect succeeded.
#[post("/account/delete", data = "<request>")]
pub fn post_delete_account(
    store: Store,
    cfg: &State<Cfg>,
    notify: &State<Notify>,
    event_log: &State<EventLog>,
    cookies: &CookieJar<'_>,
    client_ip: Option<IpAddr>,
    account: Option<Account>,
    request: Form<DeleteAccountRequest>,
) -> Result<Markup> {
    csrf::verify(cookies, request.csrf)?;

    let logged_in = account.as_ref().map(Account::name).map(str::to_owned);
    let show = |flags: &DeleteAccountFlags| {
        let csrf_token = csrf::issue(cookies);
        view::account_delete(logged_in.as_deref(), &csrf_token, flags)
    };

    if !request.confirmed {
        return Ok(show(&DeleteAccountFlags {
            missing_confirmation: true,
            ..Default::default()
        }));
    }

    let credentials = usecases::Credentials {
        username: request.username,
        password: request.password,
    };
    let user = match usecases::verify_login(&*store, &credentials) {
        Ok(user) => user,
        Err(ParameterError::UserDoesNotExist) | Err(ParameterError::UserName) => {
            return Ok(show(&DeleteAccountFlags {
                no_such_user: Some(request.username),
                ..Default::default()
            }));
        }
        Err(ParameterError::Credentials) => {
            return Ok(show(&DeleteAccountFlags {
                wrong_password: true,
                ..Default::default()
            }));
        }
        Err(err) => {
            error!("Unknown error in verify_login: {err}");
            return Ok(show(&DeleteAccountFlags {
                internal_error: true,
                ..Default::default()
            }));
        }
    };

    match usecases::count_user_channels(&*store, &user.name) {
        Ok(0) => {}
        Ok(channel_count) => {
            return Ok(show(&DeleteAccountFlags {
                channel_count,
                ..Default::default()
            }));
        }
        Err(err) => {
            // A failed lookup does not block the deletion request.
            error!("Unable to list channels owned by {}: {err}", user.name);
        }
    }

    match usecases::request_account_deletion(&*store, &user.id) {
        Ok(()) => {
            let ip = client_ip
                .map(|ip| ip.to_string())
                .unwrap_or_else(|| "unknown".into());
            event_log.append(&format!(
                "[account] {ip} requested account deletion for {}",
                user.name
            ));
        }
        Err(err) => {
            error!("Unable to request deletion of account {}: {err}", user.name);
        }
    }

    if cfg.notify_account_deletion {
        if user.email.is_some() {
            notify.notify(NotificationEvent::AccountDeletionRequested { user: &user });
        } else {
            warn!(
                "Unable to send account deletion e-mail to {}: no address on file",
                user.name
            );
        }
    } else {
        warn!("Account deletion e-mail notifications are disabled");
    }

    cookies.remove_private(Cookie::build(COOKIE_AUTH_KEY).domain(cfg.root_domain.clone()));
    Ok(view::account_deleted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::tests::prelude::*;

    fn setup() -> TestSetup {
        rocket_test_setup(vec![("/", super::super::routes())])
    }

    fn get_csrf_token(client: &Client) -> String {
        let res = client.get("/account/delete").dispatch();
        assert_eq!(res.status(), Status::Ok);
        csrf_token_from(&res.into_string().unwrap())
    }

    fn post_deletion<'c>(client: &'c Client, body: String) -> LocalResponse<'c> {
        client
            .post("/account/delete")
            .header(ContentType::Form)
            .body(body)
            .dispatch()
    }

    #[test]
    fn get_confirmation_page() {
        let TestSetup { client, .. } = setup();
        let res = client.get("/account/delete").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body_str = res.into_string().unwrap();
        assert!(body_str.contains("Delete your account"));
        assert!(body_str.contains("name=\"csrf\""));
        assert!(!body_str.contains("registered channel"));
        assert!(!body_str.contains("does not exist"));
    }

    #[test]
    fn rejects_missing_csrf_token() {
        let TestSetup { client, store, .. } = setup();
        register_user(&*store, "jane", "secret", Some("jane@example.com"));
        let res = post_deletion(
            &client,
            "confirmed=on&username=jane&password=secret".into(),
        );
        assert_eq!(res.status(), Status::Forbidden);
        assert!(store.get_user_by_name("jane").unwrap().deletion_requested_at.is_none());
    }

    #[test]
    fn rejects_wrong_csrf_token() {
        let TestSetup { client, store, .. } = setup();
        register_user(&*store, "jane", "secret", Some("jane@example.com"));
        // Obtain a session cookie, then submit a different token.
        let _ = get_csrf_token(&client);
        let res = post_deletion(
            &client,
            "csrf=bogus&confirmed=on&username=jane&password=secret".into(),
        );
        assert_eq!(res.status(), Status::Forbidden);
        assert!(store.get_user_by_name("jane").unwrap().deletion_requested_at.is_none());
    }

    #[test]
    fn requires_ticked_confirmation_box() {
        let TestSetup { client, store, .. } = setup();
        register_user(&*store, "jane", "secret", Some("jane@example.com"));
        let token = get_csrf_token(&client);
        let res = post_deletion(
            &client,
            format!("csrf={token}&username=jane&password=secret"),
        );
        assert_eq!(res.status(), Status::Ok);
        let body_str = res.into_string().unwrap();
        assert!(body_str.contains("Please tick the confirmation box"));
        assert!(store.get_user_by_name("jane").unwrap().deletion_requested_at.is_none());
    }

    #[test]
    fn reports_unknown_user() {
        let TestSetup { client, store, .. } = setup();
        let token = get_csrf_token(&client);
        let res = post_deletion(
            &client,
            format!("csrf={token}&confirmed=on&username=nobody&password=secret"),
        );
        assert_eq!(res.status(), Status::Ok);
        let body_str = res.into_string().unwrap();
        assert!(body_str.contains("does not exist"));
        assert!(body_str.contains("nobody"));
        assert_eq!(store.count_users().unwrap(), 0);
    }

    #[test]
    fn invalid_username_is_reported_like_an_unknown_user() {
        let TestSetup { client, .. } = setup();
        let token = get_csrf_token(&client);
        let res = post_deletion(
            &client,
            format!("csrf={token}&confirmed=on&username=x&password=secret"),
        );
        assert_eq!(res.status(), Status::Ok);
        let body_str = res.into_string().unwrap();
        assert!(body_str.contains("does not exist"));
    }

    #[test]
    fn reports_wrong_password() {
        let TestSetup {
            client,
            store,
            notifications,
            ..
        } = setup();
        register_user(&*store, "jane", "secret", Some("jane@example.com"));
        let token = get_csrf_token(&client);
        let res = post_deletion(
            &client,
            format!("csrf={token}&confirmed=on&username=jane&password=wrong"),
        );
        assert_eq!(res.status(), Status::Ok);
        let body_str = res.into_string().unwrap();
        assert!(body_str.contains("Invalid username/password combination."));
        assert!(store.get_user_by_name("jane").unwrap().deletion_requested_at.is_none());
        assert!(notifications.lock().unwrap().is_empty());
    }

    #[test]
    fn blocks_deletion_while_channels_are_registered() {
        let TestSetup {
            client,
            store,
            notifications,
            events,
        } = setup();
        let user = register_user(&*store, "jane", "secret", Some("jane@example.com"));
        create_channel(&*store, &user.name, "movies");
        create_channel(&*store, &user.name, "music");
        let token = get_csrf_token(&client);
        let res = post_deletion(
            &client,
            format!("csrf={token}&confirmed=on&username=jane&password=secret"),
        );
        assert_eq!(res.status(), Status::Ok);
        let body_str = res.into_string().unwrap();
        assert!(body_str.contains("You still have "));
        assert!(body_str.contains("<b>2</b>"));
        assert!(body_str.contains("registered channel"));
        assert!(store.get_user_by_name("jane").unwrap().deletion_requested_at.is_none());
        assert!(notifications.lock().unwrap().is_empty());
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn deletes_account_and_logs_the_session_out() {
        let TestSetup {
            client,
            store,
            notifications,
            events,
        } = setup();
        register_user(&*store, "jane", "secret", Some("jane@example.com"));

        // Log in so that there is an auth cookie to clear.
        let res = client
            .post("/login")
            .header(ContentType::Form)
            .body("username=jane&password=secret")
            .dispatch();
        assert_eq!(res.status(), Status::SeeOther);

        let token = get_csrf_token(&client);
        let res = post_deletion(
            &client,
            format!("csrf={token}&confirmed=on&username=jane&password=secret"),
        );
        assert_eq!(res.status(), Status::Ok);
        let removed = res
            .headers()
            .get("Set-Cookie")
            .any(|v| v.starts_with("auth=") && v.contains("Max-Age=0"));
        assert!(removed);
        let body_str = res.into_string().unwrap();
        assert!(body_str.contains("Account deleted"));

        assert!(store.get_user_by_name("jane").unwrap().deletion_requested_at.is_some());

        let sent = notifications.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (name, address) = &sent[0];
        assert_eq!(name, "jane");
        assert_eq!(address.as_str(), "jane@example.com");

        let logged = events.lock().unwrap();
        assert_eq!(logged.len(), 1);
        assert!(logged[0].starts_with("[account] "));
        assert!(logged[0].ends_with("requested account deletion for jane"));
    }

    #[test]
    fn deletes_account_without_an_email_address() {
        let TestSetup {
            client,
            store,
            notifications,
            events,
        } = setup();
        register_user(&*store, "jane", "secret", None);
        let token = get_csrf_token(&client);
        let res = post_deletion(
            &client,
            format!("csrf={token}&confirmed=on&username=jane&password=secret"),
        );
        assert_eq!(res.status(), Status::Ok);
        assert!(store.get_user_by_name("jane").unwrap().deletion_requested_at.is_some());
        assert!(notifications.lock().unwrap().is_empty());
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[test]
    fn skips_the_email_when_notifications_are_disabled() {
        let cfg = Cfg {
            notify_account_deletion: false,
            ..test_cfg()
        };
        let store = Arc::new(MemStore::default());
        let TestSetup {
            client,
            notifications,
            ..
        } = rocket_test_setup_with(vec![("/", super::super::routes())], cfg, store.clone());
        register_user(&*store, "jane", "secret", Some("jane@example.com"));
        let token = get_csrf_token(&client);
        let res = post_deletion(
            &client,
            format!("csrf={token}&confirmed=on&username=jane&password=secret"),
        );
        assert_eq!(res.status(), Status::Ok);
        assert!(store.get_user_by_name("jane").unwrap().deletion_requested_at.is_some());
        assert!(notifications.lock().unwrap().is_empty());
    }

    #[test]
    fn proceeds_when_the_channel_lookup_fails() {
        let store = Arc::new(BrokenChannelsStore::default());
        let TestSetup {
            client,
            events,
            ..
        } = rocket_test_setup_with(vec![("/", super::super::routes())], test_cfg(), store.clone());
        register_user(store.inner(), "jane", "secret", Some("jane@example.com"));
        let token = get_csrf_token(&client);
        let res = post_deletion(
            &client,
            format!("csrf={token}&confirmed=on&username=jane&password=secret"),
        );
        assert_eq!(res.status(), Status::Ok);
        let body_str = res.into_string().unwrap();
        assert!(body_str.contains("Account deleted"));
        assert!(store
            .inner()
            .get_user_by_name("jane")
            .unwrap()
            .deletion_requested_at
            .is_some());
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[test]
    fn still_logs_out_when_the_deletion_request_fails() {
        let store = Arc::new(BrokenDeletionStore::default());
        let TestSetup {
            client,
            notifications,
            events,
            ..
        } = rocket_test_setup_with(vec![("/", super::super::routes())], test_cfg(), store.clone());
        register_user(store.inner(), "jane", "secret", Some("jane@example.com"));
        let token = get_csrf_token(&client);
        let res = post_deletion(
            &client,
            format!("csrf={token}&confirmed=on&username=jane&password=secret"),
        );
        assert_eq!(res.status(), Status::Ok);
        let removed = res
            .headers()
            .get("Set-Cookie")
            .any(|v| v.starts_with("auth=") && v.contains("Max-Age=0"));
        assert!(removed);
        let body_str = res.into_string().unwrap();
        assert!(body_str.contains("Account deleted"));
        assert!(store
            .inner()
            .get_user_by_name("jane")
            .unwrap()
            .deletion_requested_at
            .is_none());
        // The audit line is skipped, but the notification step still runs.
        assert!(events.lock().unwrap().is_empty());
        assert_eq!(notifications.lock().unwrap().len(), 1);
    }
}
