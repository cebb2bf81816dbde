pub mod entities {
    pub use sw_entities::{
        channel::Channel,
        email::{EmailAddress, EmailAddressParseError, EmailContent},
        id::Id,
        password::Password,
        time::Timestamp,
        user::User,
    };
}

pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

use self::repositories::{ChannelRepo, UserRepo};

/// Combined access to all repositories of the backing store.
pub trait Db: UserRepo + ChannelRepo {}

impl<T: UserRepo + ChannelRepo> Db for T {}
