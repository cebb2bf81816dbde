use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;

use sw_core::entities::EmailAddress;
use sw_db_mem::MemStore;
use sw_gateways::{FileEventLog, Notify, Sendmail};
use sw_webserver::{Cfg, Store};

#[derive(Debug, Parser)]
#[command(name = "syncwatch", version, about = "Watch videos together.")]
pub struct Args {
    /// Domain the session cookies are scoped to.
    #[arg(long, default_value = "localhost", value_name = "DOMAIN")]
    root_domain: String,

    /// Send an e-mail when an account deletion has been requested.
    #[arg(long)]
    enable_deletion_email: bool,

    /// Sender address of outgoing e-mails.
    #[arg(long, default_value = "noreply@localhost", value_name = "ADDRESS")]
    email_from: String,

    /// File the account event log is appended to.
    #[arg(long, default_value = "events.log", value_name = "FILE")]
    event_log: PathBuf,
}

pub async fn run(args: Args) -> anyhow::Result<()> {
    let event_log = FileEventLog::open(&args.event_log).with_context(|| {
        format!("Unable to open event log '{}'", args.event_log.display())
    })?;

    let from = args
        .email_from
        .parse::<EmailAddress>()
        .with_context(|| format!("Invalid sender address '{}'", args.email_from))?;

    let store = Store::new(Arc::new(MemStore::new()));
    let notify = Notify::new(Sendmail::new(from));
    let cfg = Cfg {
        root_domain: args.root_domain,
        notify_account_deletion: args.enable_deletion_email,
    };

    info!("Starting SyncWatch web server");
    sw_webserver::run(store, cfg, Box::new(notify), Box::new(event_log)).await;
    Ok(())
}
