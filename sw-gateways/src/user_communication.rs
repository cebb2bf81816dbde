use sw_core::entities::EmailContent;

pub fn account_deletion_email(username: &str) -> EmailContent {
    let subject = "Your account is scheduled for deletion".to_owned();
    let body = format!(
        "Hi {username},\n\n\
         we received a request to delete your account. The account has been\n\
         deactivated and will be removed permanently.\n\n\
         If you did not request this, please contact the site administrators\n\
         immediately.\n",
    );
    EmailContent { subject, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deletion_email_addresses_the_user() {
        let content = account_deletion_email("jane");
        assert!(content.body.contains("Hi jane,"));
        assert!(!content.subject.is_empty());
    }
}
