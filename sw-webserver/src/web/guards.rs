use core::ops::Deref;

use rocket::{
    http::Status,
    request::{FromRequest, Outcome, Request},
};

use sw_core::gateways::{event_log::EventLogGateway, notify::NotificationGateway};

pub const COOKIE_AUTH_KEY: &str = "auth";

/// The user name carried by the private `auth` cookie.
#[derive(Debug)]
pub struct Account(String);

impl Account {
    pub fn name(&self) -> &str {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.cookies().get_private(COOKIE_AUTH_KEY) {
            Some(cookie) => Outcome::Success(Account(cookie.value().to_owned())),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

pub struct Notify(pub Box<dyn NotificationGateway + Send + Sync>);

impl Deref for Notify {
    type Target = dyn NotificationGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct EventLog(pub Box<dyn EventLogGateway + Send + Sync>);

impl Deref for EventLog {
    type Target = dyn EventLogGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
