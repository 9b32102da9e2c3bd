use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, net::IpAddr, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "commentdb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let mut cfg = Self::try_load_from_file(file_path)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            log::debug!("Using database from {ENV_NAME_DB_URL}");
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }

    /// Load the configuration file without considering the environment.
    ///
    /// A missing file results in the default configuration.
    fn try_load_from_file<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)
                .map_err(|err| anyhow!("Invalid configuration {}: {err}", file_path.display()))?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        Self::try_from(raw_config)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { db, webserver } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool size must be positive"));
        }

        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            address,
            port,
            cors,
        } = webserver.unwrap_or_default();

        let webserver = WebServer {
            address,
            port,
            enable_cors: cors,
        };

        Ok(Self { db, webserver })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io::Write as _, net::Ipv4Addr};

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(DEFAULT_CONFIG_FILE_NAME);
        let cfg = Config::try_load_from_file(Some(&missing)).unwrap();
        assert_eq!("comments.sqlite", cfg.db.conn_sqlite);
        assert_eq!(10, cfg.db.conn_pool_size);
        assert_eq!(IpAddr::V4(Ipv4Addr::LOCALHOST), cfg.webserver.address);
        assert_eq!(8080, cfg.webserver.port);
        assert!(!cfg.webserver.enable_cors);
    }

    #[test]
    fn load_config_from_file() {
        let file = write_config(
            r#"
[db]
connection-sqlite = "/var/lib/commentdb/db.sqlite"
connection-pool-size = 4

[webserver]
address = "0.0.0.0"
port = 9000
cors = true
"#,
        );
        let cfg = Config::try_load_from_file(Some(file.path())).unwrap();
        assert_eq!("/var/lib/commentdb/db.sqlite", cfg.db.conn_sqlite);
        assert_eq!(4, cfg.db.conn_pool_size);
        assert_eq!(IpAddr::V4(Ipv4Addr::UNSPECIFIED), cfg.webserver.address);
        assert_eq!(9000, cfg.webserver.port);
        assert!(cfg.webserver.enable_cors);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let file = write_config(
            r#"
[webserver]
address = "127.0.0.1"
port = 3000
cors = true
"#,
        );
        let cfg = Config::try_load_from_file(Some(file.path())).unwrap();
        assert_eq!("comments.sqlite", cfg.db.conn_sqlite);
        assert_eq!(3000, cfg.webserver.port);
    }

    #[test]
    fn reject_invalid_config() {
        let file = write_config("[db]\nconnection-sqlite = 42\n");
        assert!(Config::try_load_from_file(Some(file.path())).is_err());
        let file = write_config(
            r#"
[db]
connection-sqlite = "x.sqlite"
connection-pool-size = 0
"#,
        );
        assert!(Config::try_load_from_file(Some(file.path())).is_err());
    }
}
