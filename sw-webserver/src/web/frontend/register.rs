use maud::Markup;
use rocket::{
    self,
    form::Form,
    get, post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::view;
use crate::{core::prelude::*, web::store::Store};
use sw_core::usecases::Error as ParameterError;

#[derive(FromForm)]
pub struct RegisterForm<'r> {
    username: &'r str,
    password: &'r str,
    #[field(default = "")]
    email: &'r str,
}

#[get("/register")]
pub fn get_register(flash: Option<FlashMessage>) -> Markup {
    view::register(flash)
}

#[allow(clippy::result_large_err)]
#[post("/register", data = "<form>")]
pub fn post_register(
    store: Store,
    form: Form<RegisterForm>,
) -> std::result::Result<Flash<Redirect>, Flash<Redirect>> {
    let form = form.into_inner();
    let new_user = usecases::NewUser {
        username: form.username,
        password: form.password,
        email: (!form.email.trim().is_empty()).then_some(form.email),
    };
    match usecases::create_new_user(&*store, &new_user) {
        Err(err) => {
            let msg = match err {
                ParameterError::UserExists => "A user with this name already exists.",
                ParameterError::UserName => {
                    "Usernames may only contain 2 to 20 letters, digits, dashes and underscores."
                }
                ParameterError::Password => "Invalid password.",
                ParameterError::Email => "Invalid e-mail address.",
                _ => "We are so sorry, something went wrong :(",
            };
            Err(Flash::error(Redirect::to(uri!(get_register)), msg))
        }
        Ok(user) => Ok(Flash::success(
            Redirect::to(uri!(super::login::get_login)),
            format!("Registered successfully. You can now log in as {}.", user.name),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::tests::prelude::*;

    fn setup() -> TestSetup {
        rocket_test_setup(vec![("/", super::super::routes())])
    }

    #[test]
    fn register_new_user() {
        let TestSetup { client, store, .. } = setup();
        let res = client
            .post("/register")
            .header(ContentType::Form)
            .body("username=jane&password=secret&email=jane%40example.com")
            .dispatch();
        assert_eq!(res.status(), Status::SeeOther);
        assert_eq!(res.headers().get_one("Location").unwrap(), "/login");

        let user = store.get_user_by_name("jane").unwrap();
        assert_eq!(user.email.unwrap().as_str(), "jane@example.com");
        assert!(user.password.verify("secret"));
    }

    #[test]
    fn register_rejects_invalid_username() {
        let TestSetup { client, store, .. } = setup();
        let res = client
            .post("/register")
            .header(ContentType::Form)
            .body("username=x&password=secret")
            .dispatch();
        assert_eq!(res.status(), Status::SeeOther);
        assert_eq!(res.headers().get_one("Location").unwrap(), "/register");
        assert_eq!(store.count_users().unwrap(), 0);
    }
}
