#[macro_use]
extern crate log;

use std::net::IpAddr;

use cdb_db_sqlite::Connections;

mod adapters;
mod web;

/// Serve the comment API until the server is shut down.
pub async fn run(
    connections: Connections,
    address: IpAddr,
    port: u16,
    enable_cors: bool,
) -> anyhow::Result<()> {
    web::run(connections, address, port, enable_cors).await
}
