//! Channel membership configuration
//!
//! The set of organizations on the channel is deployment configuration,
//! injected into the ledger at construction. Asset deletion uses it to
//! sweep every org's private partition - historic agreements may have left
//! detail records in more than one org's partition.

use cadastre_core::identifiers::OrgId;
use serde::{Deserialize, Serialize};

/// Organizations participating in the channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Every organization whose private partition the ledger may hold
    /// asset detail records in.
    pub organizations: Vec<OrgId>,
}

impl ChannelConfig {
    /// Create a configuration from the channel's member organizations.
    pub fn new(organizations: Vec<OrgId>) -> Self {
        Self { organizations }
    }

    /// Whether an organization is a channel member.
    pub fn is_member(&self, org: &OrgId) -> bool {
        self.organizations.contains(org)
    }
}
