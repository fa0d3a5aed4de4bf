//! Composite nodes: [`Sequence`] (AND) and [`Selector`] (OR).
//!
//! Both keep a `current` cursor into their children.  A child that returns
//! `Running` leaves the cursor where it is, so the next tick resumes at that
//! child.  A child that finishes with the "continue" status moves the cursor
//! on and the next child runs in the same tick.  Whenever the composite
//! itself finishes it resets, which rewinds the cursor and resets every
//! child.
//!
//! An empty composite is allowed: an empty `Sequence` succeeds and an empty
//! `Selector` fails, the identities of AND and OR.

use crate::{Behavior, Status};

// ── Sequence ──────────────────────────────────────────────────────────────────

/// Runs children in order until one fails.
///
/// - `Running` → return `Running`, cursor unchanged.
/// - `Failure` → reset, return `Failure`.
/// - `Success` → advance and keep going this tick.
///
/// Running off the end resets and returns `Success`.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    current:  usize,
}

impl<C> Sequence<C> {
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self { children, current: 0 }
    }

    /// Index of the child the next tick resumes at.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        while let Some(child) = self.children.get_mut(self.current) {
            match child.tick(ctx) {
                Status::Running => return Status::Running,
                Status::Failure => {
                    self.reset();
                    return Status::Failure;
                }
                Status::Success => self.current += 1,
            }
        }
        self.reset();
        Status::Success
    }

    fn reset(&mut self) {
        self.current = 0;
        for child in &mut self.children {
            child.reset();
        }
    }
}

// ── Selector ──────────────────────────────────────────────────────────────────

/// Runs children in order until one succeeds.
///
/// - `Running` → return `Running`, cursor unchanged.
/// - `Success` → reset, return `Success`.
/// - `Failure` → advance and keep going this tick.
///
/// Running off the end resets and returns `Failure`.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    current:  usize,
}

impl<C> Selector<C> {
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        Self { children, current: 0 }
    }

    /// Index of the child the next tick resumes at.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        while let Some(child) = self.children.get_mut(self.current) {
            match child.tick(ctx) {
                Status::Running => return Status::Running,
                Status::Success => {
                    self.reset();
                    return Status::Success;
                }
                Status::Failure => self.current += 1,
            }
        }
        self.reset();
        Status::Failure
    }

    fn reset(&mut self) {
        self.current = 0;
        for child in &mut self.children {
            child.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        value: i32,
    }

    struct Increment;
    impl Behavior<TestContext> for Increment {
        fn tick(&mut self, ctx: &mut TestContext) -> Status {
            ctx.value += 1;
            Status::Success
        }
        fn reset(&mut self) {}
    }

    struct FailAlways;
    impl Behavior<TestContext> for FailAlways {
        fn tick(&mut self, _ctx: &mut TestContext) -> Status {
            Status::Failure
        }
        fn reset(&mut self) {}
    }

    /// Runs for `ticks` ticks, then succeeds.
    struct Wait {
        ticks: u32,
        seen:  u32,
    }
    impl Behavior<TestContext> for Wait {
        fn tick(&mut self, _ctx: &mut TestContext) -> Status {
            self.seen += 1;
            if self.seen > self.ticks { Status::Success } else { Status::Running }
        }
        fn reset(&mut self) {
            self.seen = 0;
        }
    }

    #[test]
    fn sequence_all_success() {
        let mut seq = Sequence::new(vec![Box::new(Increment), Box::new(Increment)]);
        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 2);
        assert_eq!(seq.current_index(), 0);
    }

    #[test]
    fn sequence_short_circuits_on_failure() {
        let mut seq = Sequence::new(vec![
            Box::new(Increment),
            Box::new(FailAlways),
            Box::new(Increment),
        ]);
        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn sequence_resumes_at_running_child() {
        let mut seq = Sequence::new(vec![
            Box::new(Increment),
            Box::new(Wait { ticks: 1, seen: 0 }),
            Box::new(Increment),
        ]);
        let mut ctx = TestContext { value: 0 };
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(seq.current_index(), 1);
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        // The first child is not re-run on resumption.
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn selector_first_success_wins() {
        let mut sel = Selector::new(vec![Box::new(Increment), Box::new(Increment)]);
        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn selector_falls_through_failures() {
        let mut sel = Selector::new(vec![Box::new(FailAlways), Box::new(Increment)]);
        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn selector_all_fail() {
        let mut sel = Selector::new(vec![Box::new(FailAlways), Box::new(FailAlways)]);
        let mut ctx = TestContext { value: 0 };
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
        assert_eq!(sel.current_index(), 0);
    }

    #[test]
    fn empty_composites_are_identities() {
        let mut ctx = TestContext { value: 0 };
        assert_eq!(Sequence::<TestContext>::new(vec![]).tick(&mut ctx), Status::Success);
        assert_eq!(Selector::<TestContext>::new(vec![]).tick(&mut ctx), Status::Failure);
    }
}
