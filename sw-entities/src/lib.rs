#![deny(missing_debug_implementations)]

//! # sw-entities
//!
//! Reusable, agnostic domain entities for SyncWatch.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod channel;
pub mod email;
pub mod id;
pub mod password;
pub mod time;
pub mod user;
