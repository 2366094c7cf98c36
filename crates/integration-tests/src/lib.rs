//! Tests that dial a live MongoDB deployment. These do not run by default; enable the
//! `integration` feature and point [CONNECTION_URI_ENV_VAR] at a running deployment:
//!
//! ```sh
//! MONGODB_DIAL_TEST_URI='mongodb://localhost:27017' cargo test --features integration
//! ```

use std::env;

use anyhow::anyhow;


pub const CONNECTION_URI_ENV_VAR: &str = "MONGODB_DIAL_TEST_URI";

pub fn connection_uri() -> anyhow::Result<String> {
    env::var(CONNECTION_URI_ENV_VAR).map_err(|_| {
        anyhow!("please set {CONNECTION_URI_ENV_VAR} to the connection string of a running MongoDB deployment")
    })
}
