use maud::{html, Markup};

use super::page::*;

/// The conditional message blocks of the confirmation page.
#[derive(Debug, Default)]
pub struct DeleteAccountFlags<'a> {
    pub channel_count: usize,
    pub missing_confirmation: bool,
    pub no_such_user: Option<&'a str>,
    pub wrong_password: bool,
    pub internal_error: bool,
}

pub fn account_delete(
    user: Option<&str>,
    csrf_token: &str,
    flags: &DeleteAccountFlags,
) -> Markup {
    page(
        "Delete Account",
        user,
        None,
        html! {
            div class="account-delete" {
                h1 { "Delete your account" }
                @if flags.missing_confirmation {
                    div class="alert" {
                        "Please tick the confirmation box if you really want to delete your account."
                    }
                }
                @if let Some(name) = flags.no_such_user {
                    div class="alert" {
                        "The user " b { (name) } " does not exist."
                    }
                }
                @if flags.wrong_password {
                    div class="alert" {
                        "Invalid username/password combination."
                    }
                }
                @if flags.internal_error {
                    div class="alert" {
                        "We are so sorry! An internal server error has occurred. Please try again later."
                    }
                }
                @if flags.channel_count > 0 {
                    div class="alert" {
                        "You still have " b { (flags.channel_count) } " registered channel(s)."
                        " Please delete them before deleting your account."
                    }
                }
                p {
                    "Deleting your account cannot be undone."
                }
                form class="delete-account" action="/account/delete" method="POST" {
                    input type="hidden" name="csrf" value=(csrf_token);
                    fieldset {
                        label {
                            input type="checkbox" name="confirmed";
                            "Yes, I want to permanently delete my account."
                        }
                        br;
                        label {
                            "Username:"
                            br;
                            input type="text" name="username";
                        }
                        br;
                        label {
                            "Password:"
                            br;
                            input type="password" name="password";
                        }
                        br;
                        input type="submit" value="Delete account";
                    }
                }
            }
        },
    )
}

pub fn account_deleted() -> Markup {
    page(
        "Account Deleted",
        None,
        None,
        html! {
            div class="account-deleted" {
                h1 { "Account deleted" }
                p {
                    "Your account has been scheduled for deletion"
                    " and you have been logged out."
                }
            }
        },
    )
}
