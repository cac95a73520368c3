//! Composite behavior nodes.
//!
//! [`Sequence`] (AND), [`Selector`] (OR) and [`WeightedSelector`] (weighted
//! random pick) control which children run and in what order.

use crate::{Behavior, Status};

/// A child with the function that weighs it against its siblings.
type WeightedOption<C> = (Box<dyn Behavior<C>>, Box<dyn Fn(&C) -> u32 + Send + Sync>);

/// Executes children left to right until one fails.
///
/// Returns `Failure` at the first failing child, `Success` if all succeed.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Sequence<C> {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Executes children left to right until one succeeds.
///
/// Returns `Success` at the first succeeding child, `Failure` if all fail.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
}

impl<C> Selector<C> {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}

/// Source of the integer draw a [`WeightedSelector`] uses.
pub trait WeightedRoll {
    /// Uniform integer in `[1, total]`. `total` is always at least 1.
    fn roll_weight(&mut self, total: u32) -> u32;
}

/// Picks one child at random, proportionally to its weight, and runs it.
///
/// # Semantics
///
/// - Every weight is evaluated against the context first
/// - A draw in `[1, total]` selects the child whose cumulative weight first
///   reaches the draw
/// - Only the chosen child runs; its status is returned
/// - If every weight is 0 nothing runs and the node fails
pub struct WeightedSelector<C> {
    options: Vec<WeightedOption<C>>,
}

impl<C> WeightedSelector<C> {
    /// # Panics
    ///
    /// Panics if `options` is empty.
    pub fn new(options: Vec<WeightedOption<C>>) -> Self {
        assert!(
            !options.is_empty(),
            "WeightedSelector must have at least one option"
        );
        Self { options }
    }
}

impl<C: WeightedRoll> Behavior<C> for WeightedSelector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        let weights: Vec<u32> = self.options.iter().map(|(_, weigh)| weigh(ctx)).collect();
        let total = weights.iter().fold(0u32, |sum, weight| sum.saturating_add(*weight));
        if total == 0 {
            return Status::Failure;
        }

        let draw = ctx.roll_weight(total).clamp(1, total);
        let mut cumulative = 0u32;
        for ((child, _), weight) in self.options.iter().zip(&weights) {
            cumulative = cumulative.saturating_add(*weight);
            if *weight > 0 && draw <= cumulative {
                return child.tick(ctx);
            }
        }
        Status::Failure
    }
}
