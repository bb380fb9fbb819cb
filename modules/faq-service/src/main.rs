//! FAQ Service — standalone binary answering questions from a flat-file FAQ.
//!
//! Hosts the JSON API and a curation dashboard on the same port.
//! Default: http://127.0.0.1:5000/

mod config;
mod dashboard;
mod error;
mod routes;
mod storage;
mod store;

use config::Config;
use routes::AppState;
use std::sync::Arc;
use std::time::Instant;
use store::KnowledgeStore;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let storage = match storage::create_storage(&config) {
        Ok(s) => s,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState {
        store: KnowledgeStore::new(storage),
        start_time: Instant::now(),
    });

    let app = routes::router(state);

    let addr = config.bind_addr();
    log::info!("FAQ Service listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
