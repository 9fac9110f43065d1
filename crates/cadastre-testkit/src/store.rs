//! In-memory partition store for testing
//!
//! A map of partition name to key/value map, matching the shape of the
//! external substrate's scoped partitions. Clones share the same underlying
//! state, so several per-org ledger handles can be driven against one
//! substrate the way separate endpoints share a channel.
//!
//! The store does not enforce partition read-scoping - that is the real
//! runtime's job. Tests exercising org boundaries rely on the ledger core's
//! own checks.

use async_trait::async_trait;
use cadastre_core::effects::{Partition, PartitionStore};
use cadastre_core::errors::Result;
use cadastre_core::hash::{hash, Hash32};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type PartitionMap = HashMap<String, HashMap<String, Vec<u8>>>;

/// In-memory partition store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPartitionStore {
    partitions: Arc<RwLock<PartitionMap>>,
}

impl MemoryPartitionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored in a partition.
    pub async fn key_count(&self, partition: &Partition) -> usize {
        let partitions = self.partitions.read().await;
        partitions
            .get(&partition.to_string())
            .map(|entries| entries.len())
            .unwrap_or(0)
    }
}

#[async_trait]
impl PartitionStore for MemoryPartitionStore {
    async fn get(&self, partition: &Partition, key: &str) -> Result<Option<Vec<u8>>> {
        let partitions = self.partitions.read().await;
        Ok(partitions
            .get(&partition.to_string())
            .and_then(|entries| entries.get(key))
            .cloned())
    }

    async fn put(&self, partition: &Partition, key: &str, value: Vec<u8>) -> Result<()> {
        let mut partitions = self.partitions.write().await;
        partitions
            .entry(partition.to_string())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, partition: &Partition, key: &str) -> Result<()> {
        let mut partitions = self.partitions.write().await;
        if let Some(entries) = partitions.get_mut(&partition.to_string()) {
            entries.remove(key);
        }
        Ok(())
    }

    async fn list(
        &self,
        partition: &Partition,
        prefix: Option<&str>,
    ) -> Result<Vec<(String, Vec<u8>)>> {
        let partitions = self.partitions.read().await;
        let mut entries: Vec<(String, Vec<u8>)> = partitions
            .get(&partition.to_string())
            .map(|entries| {
                entries
                    .iter()
                    .filter(|(key, _)| prefix.map_or(true, |p| key.starts_with(p)))
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect()
            })
            .unwrap_or_default();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(entries)
    }

    async fn digest(&self, partition: &Partition, key: &str) -> Result<Option<Hash32>> {
        let partitions = self.partitions.read().await;
        Ok(partitions
            .get(&partition.to_string())
            .and_then(|entries| entries.get(key))
            .map(|value| hash(value)))
    }
}
