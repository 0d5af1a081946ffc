// SharedValue - The external cell that value commands modify
//
// The caller creates the value and hands clones of the handle to every command
// that should modify it. All clones point at the same cell, so the caller sees
// the cumulative effect of whatever the queue has executed or rolled back.

use crate::command::trait_def::{CommandError, CommandResult};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::trace;

/// Numeric type stored in a `SharedValue`
pub type ValueType = i32;

/// One applied change, recorded in the order it happened
///
/// `delta` is `after - before` in a wider type, so subtracting
/// `ValueType::MIN` still has a representable delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modification {
    pub before: ValueType,
    pub delta: i64,
    pub after: ValueType,
}

#[derive(Debug, Default)]
struct WorkingValue {
    value: ValueType,
    journal: Vec<Modification>,
}

/// Shared handle to a mutable integer cell
///
/// Cloning the handle does not copy the value: every clone observes and
/// modifies the same cell.
#[derive(Debug, Clone, Default)]
pub struct SharedValue {
    inner: Rc<RefCell<WorkingValue>>,
}

impl SharedValue {
    /// Create a new cell holding zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new cell holding `value`
    pub fn with_value(value: ValueType) -> Self {
        Self {
            inner: Rc::new(RefCell::new(WorkingValue {
                value,
                journal: Vec::new(),
            })),
        }
    }

    /// Current value of the cell
    pub fn value(&self) -> ValueType {
        self.inner.borrow().value
    }

    /// Add `amount` to the cell
    pub fn add(&self, amount: ValueType) -> CommandResult<()> {
        self.apply(|before| before.checked_add(amount), "add", amount)
    }

    /// Subtract `amount` from the cell
    pub fn subtract(&self, amount: ValueType) -> CommandResult<()> {
        self.apply(|before| before.checked_sub(amount), "subtract", amount)
    }

    /// Apply a signed `delta` to the cell
    pub fn modify(&self, delta: ValueType) -> CommandResult<()> {
        self.add(delta)
    }

    /// Replace the value with `op(value)` and record it in the journal
    ///
    /// # Errors
    /// Returns `InvalidState` if the cell is already borrowed (a command
    /// effect re-entering the same value) or if `op` overflows. The cell is
    /// left unchanged in both cases.
    fn apply<F>(&self, op: F, operation: &str, amount: ValueType) -> CommandResult<()>
    where
        F: FnOnce(ValueType) -> Option<ValueType>,
    {
        let mut inner = self.inner.try_borrow_mut().map_err(|_| {
            CommandError::InvalidState("Shared value is already borrowed".into())
        })?;

        let before = inner.value;
        let after = op(before).ok_or_else(|| {
            CommandError::InvalidState(format!(
                "Overflow trying to {} {} on {}",
                operation, amount, before
            ))
        })?;

        inner.value = after;
        inner.journal.push(Modification {
            before,
            delta: i64::from(after) - i64::from(before),
            after,
        });

        trace!(before, after, operation, amount, "SharedValue modified");
        Ok(())
    }

    /// Every modification applied so far, oldest first
    pub fn journal(&self) -> Vec<Modification> {
        self.inner.borrow().journal.clone()
    }

    /// Forget recorded modifications without touching the value
    pub fn clear_journal(&self) {
        self.inner.borrow_mut().journal.clear();
    }

    /// Number of handles (including this one) sharing the cell
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}
