use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::page::*;

pub fn register(flash: Option<FlashMessage>) -> Markup {
    page(
        "Register",
        None,
        flash,
        html! {
          form class="register" action="register" method="POST" {
              fieldset {
                label {
                    "Username:"
                    br;
                    input type="text" name="username" placeholder="Username";
                }
                br;
                label {
                    "Password:"
                    br;
                    input type="password" name="password" placeholder="Password";
                }
                br;
                label {
                    "eMail (optional, for account notifications):"
                    br;
                    input type="email" name="email" placeholder="eMail address";
                }
                br;
                input type="submit" value="register";
              }
          }
        },
    )
}
