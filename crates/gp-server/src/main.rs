//! Guest session server binary.
//!
//! Reads `BIND_ADDR`, `AUTHORITY_URL`, and optionally `AUTHORITY_KEY`
//! from the environment, then serves until interrupted.

#[tokio::main]
async fn main() {
    gp_core::log();
    gp_server::run().await.unwrap();
}
