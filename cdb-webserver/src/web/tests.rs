use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use cdb_db_sqlite::{run_embedded_database_migrations, Connections};

pub mod prelude {
    pub use rocket::{
        http::{ContentType, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{rocket_test_setup, rocket_test_setup_without_schema};
}

fn in_memory_db() -> Connections {
    // Each connection to :memory: opens a new database
    Connections::init(":memory:", 1).unwrap()
}

fn client(mounts: Vec<(&'static str, Vec<Route>)>, db: Connections) -> Client {
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
    };
    let rocket = super::rocket_instance(options, db);
    Client::tracked(rocket).unwrap()
}

pub fn rocket_test_setup(mounts: Vec<(&'static str, Vec<Route>)>) -> (Client, Connections) {
    let db = in_memory_db();
    run_embedded_database_migrations(db.exclusive().unwrap()).unwrap();
    (client(mounts, db.clone()), db)
}

/// Every database access fails, because the table does not exist.
pub fn rocket_test_setup_without_schema(mounts: Vec<(&'static str, Vec<Route>)>) -> Client {
    client(mounts, in_memory_db())
}

#[test]
fn cors_preflight_allows_delete() {
    use rocket::http::{Header, Status};

    let db = in_memory_db();
    run_embedded_database_migrations(db.exclusive().unwrap()).unwrap();
    let options = super::InstanceOptions {
        mounts: super::mounts(),
        rocket_cfg: Some(RocketCfg::debug_default()),
    };
    let rocket = super::rocket_instance(options, db).attach(super::cors().unwrap());
    let client = Client::tracked(rocket).unwrap();

    let res = client
        .options("/1")
        .header(Header::new("Origin", "https://example.com"))
        .header(Header::new("Access-Control-Request-Method", "DELETE"))
        .dispatch();
    assert!(res.status().class().is_success());
    let headers = res.headers();
    assert_eq!(
        Some("https://example.com"),
        headers.get_one("Access-Control-Allow-Origin")
    );
    assert_eq!(
        Some("true"),
        headers.get_one("Access-Control-Allow-Credentials")
    );
    let methods = headers
        .get_one("Access-Control-Allow-Methods")
        .unwrap_or_default();
    for method in ["GET", "POST", "PUT", "DELETE"] {
        assert!(methods.contains(method), "{method} missing in {methods}");
    }

    let res = client
        .get("/1")
        .header(Header::new("Origin", "https://example.com"))
        .dispatch();
    assert_eq!(Status::NotFound, res.status());
    assert_eq!(
        Some("https://example.com"),
        res.headers().get_one("Access-Control-Allow-Origin")
    );
}
