/// Audit trail of security and account-sensitive actions,
/// distinct from operational logging.
pub trait EventLogGateway {
    fn append(&self, line: &str);
}
