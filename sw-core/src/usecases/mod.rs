mod channels;
mod create_new_user;
mod delete_account;
mod error;
mod login;


pub use self::{
    channels::*, create_new_user::*, delete_account::*, error::Error, login::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*, util::validate};
}
