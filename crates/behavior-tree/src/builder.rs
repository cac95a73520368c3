//! Helpers that box nodes, so trees read as nested calls instead of
//! `Box::new(Sequence::new(vec![...]))`.

use crate::{Behavior, Condition, Selector, Sequence, WeightedRoll, WeightedSelector};

#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// Weighted random choice between children; see [`WeightedSelector`].
#[inline]
pub fn weighted<C: WeightedRoll + 'static>(
    options: Vec<(
        Box<dyn Behavior<C>>,
        Box<dyn Fn(&C) -> u32 + Send + Sync>,
    )>,
) -> Box<dyn Behavior<C>> {
    Box::new(WeightedSelector::new(options))
}

#[inline]
pub fn condition<C: 'static>(
    predicate: impl Fn(&C) -> bool + Send + Sync + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(Condition::new(predicate))
}
