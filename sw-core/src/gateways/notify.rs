use crate::entities::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    AccountDeletionRequested,
}

#[derive(Debug)]
pub enum NotificationEvent<'a> {
    AccountDeletionRequested { user: &'a User },
}

impl NotificationEvent<'_> {
    pub fn kind(&self) -> NotificationType {
        match self {
            Self::AccountDeletionRequested { .. } => NotificationType::AccountDeletionRequested,
        }
    }
}

pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}
