//! Canned identities and invocation contexts
//!
//! Two organizations with one client each, matching the usual two-org
//! channel setup the transfer protocol is exercised against.

use cadastre_core::context::InvocationContext;
use cadastre_core::identifiers::{ClientId, OrgId};

/// First test organization.
pub fn org1() -> OrgId {
    OrgId::new("Org1MSP")
}

/// Second test organization.
pub fn org2() -> OrgId {
    OrgId::new("Org2MSP")
}

/// Client `u1` of org1.
pub fn org1_client() -> ClientId {
    ClientId::new("u1")
}

/// Client `u2` of org2.
pub fn org2_client() -> ClientId {
    ClientId::new("u2")
}

/// Context for org1's client submitting through org1's endpoint.
pub fn org1_client_context() -> InvocationContext {
    InvocationContext::new(org1_client(), org1(), org1())
}

/// Context for org2's client submitting through org2's endpoint.
pub fn org2_client_context() -> InvocationContext {
    InvocationContext::new(org2_client(), org2(), org2())
}

/// Context for a client submitting through a foreign org's endpoint;
/// fails the org-boundary check.
pub fn cross_org_context() -> InvocationContext {
    InvocationContext::new(org1_client(), org1(), org2())
}

/// Context for an arbitrary client of an arbitrary org, same-endpoint.
pub fn client_context(client: &str, org: &str) -> InvocationContext {
    InvocationContext::new(ClientId::new(client), OrgId::new(org), OrgId::new(org))
}
