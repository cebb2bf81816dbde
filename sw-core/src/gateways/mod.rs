pub mod email;
pub mod event_log;
pub mod notify;
