use crate::{email::EmailAddress, id::Id, password::Password, time::Timestamp};

/// A registered account.
///
/// The `name` is the public login handle and is looked up
/// case-insensitively by the user store.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id                    : Id,
    pub name                  : String,
    pub email                 : Option<EmailAddress>,
    pub password              : Password,
    pub created_at            : Timestamp,
    pub deletion_requested_at : Option<Timestamp>,
}
