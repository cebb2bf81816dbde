use std::{io::Result, thread};
#[cfg(not(test))]
use std::{
    io::{prelude::*, Error, ErrorKind},
    process::{Command, Stdio},
};

use sw_core::{entities::*, gateways::email::EmailGateway};

/// Dispatches e-mails through the local `sendmail` binary.
#[derive(Debug, Clone)]
pub struct Sendmail {
    from: EmailAddress,
}

impl Sendmail {
    pub fn new(from: EmailAddress) -> Self {
        Self { from }
    }

    fn send(&self, mail: String) {
        thread::spawn(move || {
            if let Err(err) = send_raw(&mail) {
                warn!("Could not send e-mail: {}", err);
            }
        });
    }
}

#[cfg(not(test))]
fn send_raw(mail: &str) -> Result<()> {
    let mut child = Command::new("sendmail")
        .arg("-t")
        .stdin(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .as_mut()
        .ok_or_else(|| Error::new(ErrorKind::Other, "Could not get stdin"))?
        .write_all(mail.as_bytes())?;
    child.wait_with_output()?;
    Ok(())
}

/// Don't actually send e-mails while running the tests.
#[cfg(test)]
fn send_raw(mail: &str) -> Result<()> {
    debug!("Would send e-mail: {}", mail);
    Ok(())
}

impl EmailGateway for Sendmail {
    fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent) {
        debug!("Sending e-mails to: {:?}", recipients);
        for to in recipients {
            self.send(compose(&self.from, to, email));
        }
    }
}

const LINE_BREAK: &str = "\r\n";

// Header fields must stay ASCII; non-ASCII subjects are encoded
// as a quoted-printable encoded word.
fn encode_subject(subject: &str) -> String {
    if subject.is_ascii() {
        subject.to_owned()
    } else {
        format!(
            "=?UTF-8?Q?{}?=",
            quoted_printable::encode_to_str(subject.as_bytes())
        )
    }
}

fn compose(from: &EmailAddress, to: &EmailAddress, email: &EmailContent) -> String {
    [
        &format!("From: {}", from),
        &format!("To: {}", to),
        &format!("Subject: {}", encode_subject(&email.subject)),
        "MIME-Version: 1.0",
        "Content-Type: text/plain; charset=utf-8",
        "",
        &email.body,
    ]
    .join(LINE_BREAK)
}
