use super::prelude::*;

/// The number of channels currently registered by the given user.
/// Derived at request time, never stored.
pub fn count_user_channels<R>(repo: &R, owner: &str) -> Result<usize>
where
    R: ChannelRepo + ?Sized,
{
    Ok(repo.channels_of_user(owner)?.len())
}
