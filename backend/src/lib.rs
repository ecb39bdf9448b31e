//! Shift scheduling backend.
//!
//! Hexagonal layout: `domain` holds entities, policy and services behind
//! ports; `inbound::http` adapts Actix requests onto the driving ports;
//! `outbound` provides the in-memory store and the security adapters;
//! `server` wires them into a runnable application.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
