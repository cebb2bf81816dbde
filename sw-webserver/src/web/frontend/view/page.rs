use maud::{html, Markup, DOCTYPE};
use rocket::request::FlashMessage;

pub fn page(
    title: &str,
    user: Option<&str>,
    flash: Option<FlashMessage>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no";
            title {(title)}
        }
        body {
            (flash_msg(flash))
            (header(user))
            (content)
        }
    }
}

fn flash_msg(flash: Option<FlashMessage>) -> Markup {
    html! {
        @if let Some(msg) = flash {
            div class=(format!("flash {}", msg.kind())) {
                (msg.message())
            }
        }
    }
}

fn header(user: Option<&str>) -> Markup {
    html! {
    header {
        @if let Some(name) = user {
            div class="msg" { "You are logged in as " span class="user" { (name) } }
            nav {
                a href="/" { "home" }
                a href="/account/delete" { "delete account" }
                form class="logout" action="/logout" method="POST" {
                    input type="submit" value="logout";
                }
            }
        } @else {
            nav {
                a href="/login" { "login" }
                a href="/register" { "register" }
            }
        }
    }
    }
}
