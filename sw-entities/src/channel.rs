use crate::{id::Id, time::Timestamp};

/// A channel registered by a user.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id         : Id,
    pub name       : String,
    pub owner      : String,
    pub created_at : Timestamp,
}
