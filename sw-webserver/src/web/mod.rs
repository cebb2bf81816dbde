use rocket::{config::Config as RocketCfg, Rocket, Route};

use sw_core::gateways::{event_log::EventLogGateway, notify::NotificationGateway};

pub(crate) mod csrf;
mod frontend;
mod guards;
mod store;


pub use store::Store;

#[derive(Debug, Clone)]
pub struct Cfg {
    /// Domain the session cookies are scoped to.
    pub root_domain: String,
    /// Send an e-mail when an account deletion has been requested.
    pub notify_account_deletion: bool,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) struct Gateways {
    notify: Box<dyn NotificationGateway + Send + Sync>,
    event_log: Box<dyn EventLogGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    store: Store,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;
    let Gateways { notify, event_log } = gateways;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(store)
        .manage(guards::Notify(notify))
        .manage(guards::EventLog(event_log))
        .manage(cfg);

    for (m, routes) in mounts {
        instance = instance.mount(m, routes);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", frontend::routes())]
}

pub async fn run(
    store: Store,
    cfg: Cfg,
    notify: Box<dyn NotificationGateway + Send + Sync>,
    event_log: Box<dyn EventLogGateway + Send + Sync>,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let gateways = Gateways { notify, event_log };

    let instance = rocket_instance(options, store, gateways);
    if let Err(err) = instance.launch().await {
        error!("Unable to run web server: {err}");
    }
}
