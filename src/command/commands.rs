// Concrete command implementations

use crate::command::state::{SharedValue, ValueType};
use crate::command::trait_def::{Command, CommandResult};
use tracing::debug;

/// Boxed effect function used by `LambdaCommand`
pub type EffectFn = Box<dyn FnMut() -> CommandResult<()>>;

/// Command built from two independent closures
///
/// The forward closure runs on `execute()`, the inverse closure on
/// `rollback()`. The caller is responsible for making them inverses of
/// each other.
pub struct LambdaCommand {
    execute: EffectFn,
    rollback: EffectFn,
    description: String,
}

impl LambdaCommand {
    /// Create a new LambdaCommand
    ///
    /// # Arguments
    /// * `execute` - Forward effect
    /// * `rollback` - Inverse of `execute`
    pub fn new<E, R>(execute: E, rollback: R) -> Self
    where
        E: FnMut() -> CommandResult<()> + 'static,
        R: FnMut() -> CommandResult<()> + 'static,
    {
        Self {
            execute: Box::new(execute),
            rollback: Box::new(rollback),
            description: "Lambda".to_string(),
        }
    }

    /// Closure pair that modifies `value` by `modification`
    pub fn modify_value(value: SharedValue, modification: ValueType) -> Self {
        let forward = value.clone();
        Self::new(
            move || forward.modify(modification),
            move || value.subtract(modification),
        )
        .with_description(format!("Lambda modify by {}", modification))
    }

    /// Replace the default description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Command for LambdaCommand {
    fn execute(&mut self) -> CommandResult<()> {
        debug!(command = %self.description, "Execute LambdaCommand");
        (self.execute)()
    }

    fn rollback(&mut self) -> CommandResult<()> {
        debug!(command = %self.description, "Rollback LambdaCommand");
        (self.rollback)()
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

impl std::fmt::Debug for LambdaCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LambdaCommand")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Command that adds a fixed amount to a shared value
#[derive(Debug, Clone)]
pub struct AdditionCommand {
    value: SharedValue,
    modification: ValueType,
}

impl AdditionCommand {
    pub fn new(value: SharedValue, modification: ValueType) -> Self {
        Self {
            value,
            modification,
        }
    }

    pub fn modification(&self) -> ValueType {
        self.modification
    }
}

impl Command for AdditionCommand {
    fn execute(&mut self) -> CommandResult<()> {
        debug!(amount = self.modification, "Execute AdditionCommand");
        self.value.add(self.modification)
    }

    fn rollback(&mut self) -> CommandResult<()> {
        debug!(amount = self.modification, "Rollback AdditionCommand");
        self.value.subtract(self.modification)
    }

    fn description(&self) -> String {
        format!("Add {}", self.modification)
    }
}

/// Command that subtracts a fixed amount from a shared value
#[derive(Debug, Clone)]
pub struct SubtractCommand {
    value: SharedValue,
    modification: ValueType,
}

impl SubtractCommand {
    pub fn new(value: SharedValue, modification: ValueType) -> Self {
        Self {
            value,
            modification,
        }
    }

    pub fn modification(&self) -> ValueType {
        self.modification
    }
}

impl Command for SubtractCommand {
    fn execute(&mut self) -> CommandResult<()> {
        debug!(amount = self.modification, "Execute SubtractCommand");
        self.value.subtract(self.modification)
    }

    fn rollback(&mut self) -> CommandResult<()> {
        debug!(amount = self.modification, "Rollback SubtractCommand");
        self.value.add(self.modification)
    }

    fn description(&self) -> String {
        format!("Subtract {}", self.modification)
    }
}

/// Command that applies a signed modification to a shared value
///
/// Positive and negative modifications are both allowed, so this covers
/// addition and subtraction with a single type.
#[derive(Debug, Clone)]
pub struct ModifyValueCommand {
    value: SharedValue,
    modification: ValueType,
}

impl ModifyValueCommand {
    pub fn new(value: SharedValue, modification: ValueType) -> Self {
        Self {
            value,
            modification,
        }
    }

    pub fn modification(&self) -> ValueType {
        self.modification
    }
}

impl Command for ModifyValueCommand {
    fn execute(&mut self) -> CommandResult<()> {
        debug!(amount = self.modification, "Execute ModifyValueCommand");
        self.value.modify(self.modification)
    }

    fn rollback(&mut self) -> CommandResult<()> {
        debug!(amount = self.modification, "Rollback ModifyValueCommand");
        self.value.subtract(self.modification)
    }

    fn description(&self) -> String {
        format!("Modify by {}", self.modification)
    }
}
