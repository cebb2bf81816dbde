//! Outbound adapters: e-mail dispatch, user notifications and the
//! account event log.

#[macro_use]
extern crate log;

mod event_log;
mod notify;
mod sendmail;
mod user_communication;

pub use self::{event_log::FileEventLog, notify::Notify, sendmail::Sendmail};
