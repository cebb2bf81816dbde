use std::sync::Arc;

use sw_core::gateways::{
    email::EmailGateway,
    notify::{NotificationEvent, NotificationGateway},
};

use crate::user_communication;

/// Turns notification events into e-mails for the affected user.
#[derive(Clone)]
pub struct Notify {
    email_gw: Arc<dyn EmailGateway + Send + Sync + 'static>,
}

impl Notify {
    pub fn new<G>(gw: G) -> Self
    where
        G: EmailGateway + Send + Sync + 'static,
    {
        Self {
            email_gw: Arc::new(gw),
        }
    }
}

impl NotificationGateway for Notify {
    fn notify(&self, event: NotificationEvent) {
        match event {
            NotificationEvent::AccountDeletionRequested { user } => {
                let Some(address) = &user.email else {
                    warn!("No e-mail address on file for {}", user.name);
                    return;
                };
                let content = user_communication::account_deletion_email(&user.name);
                info!("Sending account deletion e-mail to {}", address);
                self.email_gw
                    .compose_and_send(std::slice::from_ref(address), &content);
            }
        }
    }
}
