use std::net::IpAddr;

use anyhow::Result as Fallible;
use cdb_db_sqlite::Connections;
use rocket::{config::Config as RocketCfg, http::Method, Rocket, Route};
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};

pub mod api;

#[cfg(test)]
pub mod tests;

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
}

pub(crate) fn rocket_instance(options: InstanceOptions, db: Connections) -> Rocket<rocket::Build> {
    let InstanceOptions { mounts, rocket_cfg } = options;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(db).register("/", api::catchers());

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes())]
}

fn cors() -> Fallible<rocket_cors::Cors> {
    let allowed_methods = [
        Method::Get,
        Method::Head,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Options,
    ]
    .into_iter()
    .map(From::from)
    .collect();
    let cors = CorsOptions {
        allowed_origins: AllowedOrigins::all(),
        allowed_methods,
        allowed_headers: AllowedHeaders::some(&["X-Requested-With", "Content-Type"]),
        allow_credentials: true,
        ..Default::default()
    }
    .to_cors()?;
    Ok(cors)
}

pub async fn run(db: Connections, address: IpAddr, port: u16, enable_cors: bool) -> Fallible<()> {
    // Settings from Rocket.toml and ROCKET_* variables are
    // kept, only the listen address is replaced.
    let rocket_cfg = RocketCfg::figment()
        .merge(("address", address))
        .merge(("port", port))
        .extract::<RocketCfg>()?;
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
    };

    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        info!("Enabling CORS");
        instance.attach(cors()?).launch()
    } else {
        instance.launch()
    };
    info!("Listening on {address}:{port}");
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
        anyhow::bail!("Web server terminated unexpectedly");
    }
    Ok(())
}
