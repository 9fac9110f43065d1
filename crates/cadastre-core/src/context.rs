//! Per-invocation identity context.
//!
//! The invoking runtime constructs one of these for every operation and
//! passes it into the ledger core. It carries the three identity facts the
//! core is allowed to rely on:
//!
//! - which client submitted the invocation (`client_id`),
//! - which organization that client declared (`client_org`),
//! - which organization operates the executing endpoint (`endpoint_org`).
//!
//! The core never caches a context across invocations; a new one arrives
//! with every call, so identity decisions are always made against the
//! current submitter.

use crate::identifiers::{ClientId, CollectionName, OrgId};
use serde::{Deserialize, Serialize};

/// Identity context threaded through every ledger core operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationContext {
    client_id: ClientId,
    client_org: OrgId,
    endpoint_org: OrgId,
}

impl InvocationContext {
    /// Create a context for an invocation submitted by `client_id` of
    /// `client_org`, executing on an endpoint operated by `endpoint_org`.
    pub fn new(client_id: ClientId, client_org: OrgId, endpoint_org: OrgId) -> Self {
        Self {
            client_id,
            client_org,
            endpoint_org,
        }
    }

    /// Unique identifier of the submitting client.
    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Organization the submitting client belongs to.
    pub fn client_org(&self) -> &OrgId {
        &self.client_org
    }

    /// Organization of the endpoint executing this invocation.
    pub fn endpoint_org(&self) -> &OrgId {
        &self.endpoint_org
    }

    /// Private-partition name of the submitting client's organization.
    pub fn client_collection(&self) -> CollectionName {
        self.client_org.private_collection()
    }
}
