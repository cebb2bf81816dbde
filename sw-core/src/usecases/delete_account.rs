use super::prelude::*;

/// Records a deletion request for the account with the given id.
///
/// The actual removal happens out of band; this only marks the
/// account and reports success or failure.
pub fn request_account_deletion<R>(repo: &R, id: &Id) -> Result<()>
where
    R: UserRepo + ?Sized,
{
    log::info!("Requesting deletion of account {id}");
    Ok(repo.request_account_deletion(id)?)
}
