//! Action domain: catalog descriptors, outbound requests and parameter population.
//!
//! # Module Structure
//!
//! - `descriptor`: Trigger kinds, logic categories and catalog entries
//! - `request`: The outbound `ActionRequest` record
//! - `builder`: Deterministic parameter table keyed by `ActionLogic`

pub mod builder;
pub mod descriptor;
pub mod request;

pub use builder::{horizontal_direction, populate};
pub use descriptor::{ActionDescriptor, ActionLogic, ContinuousInputKind, TriggerKind};
pub use request::{ActionRequest, TargetSet};
