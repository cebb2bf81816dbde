// Low-level store access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by the owner's user name and never modified or loaded by
// another repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;

    /// Looks up a user by name, ignoring ASCII case.
    fn try_get_user_by_name(&self, name: &str) -> Result<Option<User>>;
    fn get_user_by_name(&self, name: &str) -> Result<User> {
        self.try_get_user_by_name(name)?.ok_or(Error::NotFound)
    }

    /// Records a deletion request against the user's id.
    fn request_account_deletion(&self, id: &Id) -> Result<()>;

    fn count_users(&self) -> Result<usize>;
}

pub trait ChannelRepo {
    fn create_channel(&self, channel: &Channel) -> Result<()>;

    /// All channels registered by the given user, ignoring ASCII case.
    fn channels_of_user(&self, owner: &str) -> Result<Vec<Channel>>;

    fn count_channels(&self) -> Result<usize>;
}
