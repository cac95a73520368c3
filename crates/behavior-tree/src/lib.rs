//! Small behavior tree library for turn-based decision making.
//!
//! - **One tick, one decision**: nodes succeed or fail immediately; there is
//!   no running state to resume on a later turn
//! - **Deterministic**: randomness is requested from the context through
//!   [`WeightedRoll`], never drawn from a global source
//! - **Zero dependencies**
//!
//! # Architecture
//!
//! - [`Behavior`]: core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Composite nodes: [`Sequence`], [`Selector`], [`WeightedSelector`]
//! - Leaf nodes: [`Condition`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod leaf;
pub mod status;

pub use behavior::Behavior;
pub use composite::{Selector, Sequence, WeightedRoll, WeightedSelector};
pub use leaf::Condition;
pub use status::Status;
