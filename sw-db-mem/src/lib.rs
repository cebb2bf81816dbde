//! In-memory implementation of the store repositories.
//!
//! Users are keyed by their lower-cased name, so all lookups are
//! case-insensitive as required by the login contract.

use std::collections::HashMap;

use parking_lot::RwLock;

use sw_core::{
    entities::*,
    repositories::{ChannelRepo, Error, UserRepo},
};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Default)]
pub struct MemStore {
    users: RwLock<HashMap<String, User>>,
    channels: RwLock<Vec<Channel>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepo for MemStore {
    fn create_user(&self, user: &User) -> Result<()> {
        let key = user.name.to_lowercase();
        let mut users = self.users.write();
        if users.contains_key(&key) {
            return Err(Error::AlreadyExists);
        }
        users.insert(key, user.clone());
        Ok(())
    }

    fn try_get_user_by_name(&self, name: &str) -> Result<Option<User>> {
        Ok(self.users.read().get(&name.to_lowercase()).cloned())
    }

    fn request_account_deletion(&self, id: &Id) -> Result<()> {
        let mut users = self.users.write();
        let user = users
            .values_mut()
            .find(|u| &u.id == id)
            .ok_or(Error::NotFound)?;
        user.deletion_requested_at = Some(Timestamp::now());
        Ok(())
    }

    fn count_users(&self) -> Result<usize> {
        Ok(self.users.read().len())
    }
}

impl ChannelRepo for MemStore {
    fn create_channel(&self, channel: &Channel) -> Result<()> {
        let mut channels = self.channels.write();
        if channels
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(&channel.name))
        {
            return Err(Error::AlreadyExists);
        }
        channels.push(channel.clone());
        Ok(())
    }

    fn channels_of_user(&self, owner: &str) -> Result<Vec<Channel>> {
        Ok(self
            .channels
            .read()
            .iter()
            .filter(|c| c.owner.eq_ignore_ascii_case(owner))
            .cloned()
            .collect())
    }

    fn count_channels(&self) -> Result<usize> {
        Ok(self.channels.read().len())
    }
}
