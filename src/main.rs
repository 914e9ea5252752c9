use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;
use tracing::{error, info};

mod auth;
mod config;
mod context;
mod db;
mod domain;
mod errors;
mod flash;
mod forms;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bulosan_rentals=info".into()),
        )
        .init();

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 1️⃣ Create the database handle
    let db = Database::new(cfg.database_path.clone());

    // 2️⃣ Create tables, seed listings and the admin account
    if let Err(e) = init_db(&db, &cfg.admin_seed()) {
        error!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    // 3️⃣ Start the server
    let addr: SocketAddr = match cfg.addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid listen address {:?}: {e}", cfg.addr);
            std::process::exit(1);
        }
    };
    info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(cfg.max_workers);

    // 4️⃣ Serve requests, passing db handle into closure
    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
