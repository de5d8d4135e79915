//! Game rules: entitlement gating, dealing and state transitions.
//!
//! `Rules` holds the configuration and exposes one transition per
//! operation. Transitions never mutate their input; they return the next
//! `GameState` or the `GameError` that blocked it.

pub mod deal;
pub mod engine;
pub mod entitlement;

pub use deal::{Deal, DealContext};
pub use engine::Rules;
pub use entitlement::{entitlement_for, DemoAccess, Entitlement, FullAccess};
