use std::{net::IpAddr, path::PathBuf};

use anyhow::Result as Fallible;
use cdb_db_sqlite::{run_embedded_database_migrations, Connections};
use clap::{Args, Parser, Subcommand};

use crate::config::{self, Config};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web server (default)
    Serve(ServeArgs),
    /// Create or upgrade the database schema and exit
    Migrate {
        /// URL to the database
        #[arg(long, value_name = "DATABASE_URL")]
        db_url: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Listen on this address
    #[arg(long)]
    address: Option<IpAddr>,

    /// Listen on this port
    #[arg(short, long)]
    port: Option<u16>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

impl ServeArgs {
    fn override_config(self, cfg: &mut Config) {
        let Self {
            db_url,
            address,
            port,
            enable_cors,
        } = self;
        if let Some(db_url) = db_url {
            cfg.db.conn_sqlite = db_url;
        }
        if let Some(address) = address {
            cfg.webserver.address = address;
        }
        if let Some(port) = port {
            cfg.webserver.port = port;
        }
        cfg.webserver.enable_cors |= enable_cors;
    }
}

fn connect_and_migrate(db: &config::Db) -> Fallible<Connections> {
    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        db.conn_sqlite,
        db.conn_pool_size
    );
    let connections = Connections::init(&db.conn_sqlite, db.conn_pool_size)?;
    run_embedded_database_migrations(connections.exclusive()?)?;
    Ok(connections)
}

pub async fn run() -> Fallible<()> {
    let Cli {
        config_file,
        command,
    } = Cli::parse();
    let mut cfg = Config::try_load_from_file_or_default(config_file)?;

    match command.unwrap_or_else(|| Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => {
            args.override_config(&mut cfg);
            let connections = connect_and_migrate(&cfg.db)?;
            let config::WebServer {
                address,
                port,
                enable_cors,
            } = cfg.webserver;
            cdb_webserver::run(connections, address, port, enable_cors).await
        }
        Command::Migrate { db_url } => {
            if let Some(db_url) = db_url {
                cfg.db.conn_sqlite = db_url;
            }
            connect_and_migrate(&cfg.db)?;
            log::info!("Database schema is up to date");
            Ok(())
        }
    }
}
