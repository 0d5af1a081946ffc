// ValueCommand - Closed set of cloneable commands
//
// `Box<dyn Command>` covers any command type but cannot be cloned. When the
// set of command kinds is known up front, ValueCommand gives a queue that can
// be copied as a whole: `CommandQueue<ValueCommand>` derives Clone.
//
// Copies of a command still share the SharedValue handle they modify.

use crate::command::commands::{AdditionCommand, ModifyValueCommand, SubtractCommand};
use crate::command::state::{SharedValue, ValueType};
use crate::command::trait_def::{Command, CommandResult};
use std::fmt;
use std::rc::Rc;
use tracing::debug;

type SharedEffect = Rc<dyn Fn() -> CommandResult<()>>;

/// Closure pair that can be cloned cheaply
///
/// Effects are `Fn` rather than `FnMut` because clones share them.
#[derive(Clone)]
pub struct SharedLambda {
    execute: SharedEffect,
    rollback: SharedEffect,
    description: String,
}

impl SharedLambda {
    pub fn new<E, R>(execute: E, rollback: R) -> Self
    where
        E: Fn() -> CommandResult<()> + 'static,
        R: Fn() -> CommandResult<()> + 'static,
    {
        Self {
            execute: Rc::new(execute),
            rollback: Rc::new(rollback),
            description: "Lambda".to_string(),
        }
    }

    pub fn modify_value(value: SharedValue, modification: ValueType) -> Self {
        let forward = value.clone();
        Self::new(
            move || forward.modify(modification),
            move || value.subtract(modification),
        )
        .with_description(format!("Lambda modify by {}", modification))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl fmt::Debug for SharedLambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedLambda")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Every command kind a value-semantics queue can hold
#[derive(Debug, Clone)]
pub enum ValueCommand {
    Add(AdditionCommand),
    Subtract(SubtractCommand),
    Modify(ModifyValueCommand),
    Lambda(SharedLambda),
}

impl Command for ValueCommand {
    fn execute(&mut self) -> CommandResult<()> {
        match self {
            ValueCommand::Add(cmd) => cmd.execute(),
            ValueCommand::Subtract(cmd) => cmd.execute(),
            ValueCommand::Modify(cmd) => cmd.execute(),
            ValueCommand::Lambda(lambda) => {
                debug!(command = %lambda.description, "Execute SharedLambda");
                (lambda.execute)()
            }
        }
    }

    fn rollback(&mut self) -> CommandResult<()> {
        match self {
            ValueCommand::Add(cmd) => cmd.rollback(),
            ValueCommand::Subtract(cmd) => cmd.rollback(),
            ValueCommand::Modify(cmd) => cmd.rollback(),
            ValueCommand::Lambda(lambda) => {
                debug!(command = %lambda.description, "Rollback SharedLambda");
                (lambda.rollback)()
            }
        }
    }

    fn description(&self) -> String {
        match self {
            ValueCommand::Add(cmd) => cmd.description(),
            ValueCommand::Subtract(cmd) => cmd.description(),
            ValueCommand::Modify(cmd) => cmd.description(),
            ValueCommand::Lambda(lambda) => lambda.description.clone(),
        }
    }
}

impl From<AdditionCommand> for ValueCommand {
    fn from(cmd: AdditionCommand) -> Self {
        ValueCommand::Add(cmd)
    }
}

impl From<SubtractCommand> for ValueCommand {
    fn from(cmd: SubtractCommand) -> Self {
        ValueCommand::Subtract(cmd)
    }
}

impl From<ModifyValueCommand> for ValueCommand {
    fn from(cmd: ModifyValueCommand) -> Self {
        ValueCommand::Modify(cmd)
    }
}

impl From<SharedLambda> for ValueCommand {
    fn from(lambda: SharedLambda) -> Self {
        ValueCommand::Lambda(lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_target() {
        let value = SharedValue::new();
        let mut original = ValueCommand::from(ModifyValueCommand::new(value.clone(), 4));
        let mut copy = original.clone();

        original.execute().unwrap();
        copy.execute().unwrap();
        assert_eq!(value.value(), 8);

        copy.rollback().unwrap();
        original.rollback().unwrap();
        assert_eq!(value.value(), 0);
    }

    #[test]
    fn test_lambda_variant() {
        let value = SharedValue::new();
        let mut cmd = ValueCommand::from(SharedLambda::modify_value(value.clone(), -6));

        cmd.execute().unwrap();
        assert_eq!(value.value(), -6);
        cmd.clone().rollback().unwrap();
        assert_eq!(value.value(), 0);
        assert_eq!(cmd.description(), "Lambda modify by -6");
    }

    #[test]
    fn test_variant_descriptions() {
        let value = SharedValue::new();
        let add = ValueCommand::from(AdditionCommand::new(value.clone(), 1));
        let sub = ValueCommand::from(SubtractCommand::new(value.clone(), 2));
        let lambda = ValueCommand::from(
            SharedLambda::new(|| Ok(()), || Ok(())).with_description("Noop"),
        );

        assert_eq!(add.description(), "Add 1");
        assert_eq!(sub.description(), "Subtract 2");
        assert_eq!(lambda.description(), "Noop");
    }
}
