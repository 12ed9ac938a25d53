//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - the membership API every filter exposes
//! - Driven Ports (outbound) - the hashing capability filters depend on

pub mod inbound;
pub mod outbound;

pub use inbound::MembershipFilter;
pub use outbound::StringHasher;
