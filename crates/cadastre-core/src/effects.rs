//! Partitioned key-value store effect interface
//!
//! Pure trait for the external ledger the core reads and writes through.
//! Which organizations may read a given private partition is configured in
//! the runtime that implements this trait, not here; the core's own
//! org-boundary checks sit on top of, never instead of, that scoping.
//!
//! Writes issued through this trait within one invocation commit as a
//! single atomic unit or not at all - the substrate's invocation-scoped
//! read/write-set semantics. The core keeps read-sets minimal so the
//! substrate's optimistic conflict detection stays effective.

use crate::errors::Result;
use crate::hash::Hash32;
use crate::identifiers::CollectionName;
use async_trait::async_trait;
use std::fmt;

/// A storage partition on the channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Partition {
    /// The public partition, readable by every organization on the channel.
    Public,
    /// A named private partition, readable only by its declared organizations.
    Private(CollectionName),
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Public => write!(f, "public"),
            Partition::Private(name) => write!(f, "{name}"),
        }
    }
}

/// Pure trait for partitioned key-value ledger access.
#[async_trait]
pub trait PartitionStore: Send + Sync {
    /// Read the value stored at `key`, or `None` if absent.
    async fn get(&self, partition: &Partition, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write `value` at `key`, replacing any existing value.
    async fn put(&self, partition: &Partition, key: &str, value: Vec<u8>) -> Result<()>;

    /// Remove the value at `key`. Removing an absent key is a no-op.
    async fn delete(&self, partition: &Partition, key: &str) -> Result<()>;

    /// List `(key, value)` pairs in a partition, optionally restricted to
    /// keys with the given prefix, in ascending key order.
    async fn list(&self, partition: &Partition, prefix: Option<&str>)
        -> Result<Vec<(String, Vec<u8>)>>;

    /// Content digest of the value at `key`, or `None` if absent.
    ///
    /// The substrate exposes digests of private data across organization
    /// boundaries even where the raw bytes are not readable, which is what
    /// lets two orgs compare valuations without revealing them.
    async fn digest(&self, partition: &Partition, key: &str) -> Result<Option<Hash32>>;
}
