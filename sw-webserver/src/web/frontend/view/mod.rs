use maud::{html, Markup};

mod account;
mod login;
mod page;
mod register;

pub use account::*;
pub use login::*;
use page::*;
pub use register::*;

pub fn index(user: Option<&str>) -> Markup {
    page(
        "SyncWatch",
        user,
        None,
        html! {
            div class="intro" {
                h1 { "SyncWatch" }
                p { "Register a channel and watch together." }
            }
        },
    )
}
