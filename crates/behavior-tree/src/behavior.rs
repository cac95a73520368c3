//! Core behavior trait.
//!
//! Nodes are generic over a context type `C` (the blackboard). A node may read
//! the context to decide and write to it to record what it decided.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this node once.
    ///
    /// Returns `Status::Success` if the node's condition held or its action
    /// was taken, `Status::Failure` otherwise.
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Lets boxed nodes be used wherever a node is expected.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
