//! Cadastre Testing Infrastructure
//!
//! Common test fixtures for exercising the asset ledger: an in-memory
//! partition store standing in for the external ledger substrate, and
//! canned organization/client identities.
//!
//! # Usage
//!
//! Add this to your crate's `Cargo.toml` dev-dependencies:
//! ```toml
//! [dev-dependencies]
//! cadastre-testkit = { path = "../cadastre-testkit" }
//! ```
//!
//! Then in your tests:
//! ```rust,no_run
//! use cadastre_testkit::{org1_client_context, MemoryPartitionStore};
//!
//! let store = MemoryPartitionStore::new();
//! let ctx = org1_client_context();
//! // ... drive the ledger
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

pub mod fixtures;
pub mod store;

pub use fixtures::*;
pub use store::MemoryPartitionStore;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Install a test tracing subscriber honoring `RUST_LOG`. Safe to call from
/// every test; only the first call installs anything.
pub fn init_test_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}
