//! Core behavior trait.

use crate::Status;

/// A node in a behavior tree, ticked against a context `C`.
///
/// Nodes own their progress (a composite's child cursor, a leaf's sub-state
/// and timers), so `tick` takes `&mut self`.  The context carries the world
/// the node reads and mutates.
pub trait Behavior<C> {
    /// Advance this node by one tick.
    ///
    /// `Running` means "call me again, I kept my place"; `Success` and
    /// `Failure` end the activation.
    fn tick(&mut self, ctx: &mut C) -> Status;

    /// Forget all progress so the next `tick` starts from scratch.
    fn reset(&mut self);
}

/// Lets `Box<dyn Behavior<C>>` sit anywhere a node is expected.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }
}
