use maud::Markup;
use rocket::{get, routes, Route};

use crate::web::guards::*;

mod account;
mod login;
mod register;
mod view;

#[get("/")]
pub fn get_index(account: Option<Account>) -> Markup {
    view::index(account.as_ref().map(Account::name))
}

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        login::get_login,
        login::post_login,
        login::post_logout,
        register::get_register,
        register::post_register,
        account::get_delete_account,
        account::post_delete_account,
    ]
}
