// Random command creation, used by the demo and benchmarks

use crate::command::commands::{AdditionCommand, LambdaCommand, SubtractCommand};
use crate::command::state::{SharedValue, ValueType};
use crate::command::trait_def::Command;
use crate::command::value::{SharedLambda, ValueCommand};
use crate::random::{DEFAULT_MAGNITUDE_RANGE, RandomRange};

/// Kind of command picked by the factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Lambda,
    Addition,
    Subtraction,
}

impl CommandKind {
    /// Pick one of the three kinds uniformly
    pub fn random<R: RandomRange + ?Sized>(rng: &mut R) -> Self {
        match rng.random_in_range(0, 2) {
            0 => CommandKind::Lambda,
            1 => CommandKind::Addition,
            _ => CommandKind::Subtraction,
        }
    }
}

/// Random command on `value` with a magnitude in `[1, 100]`
pub fn create_random_command<R: RandomRange + ?Sized>(
    value: &SharedValue,
    rng: &mut R,
) -> Box<dyn Command> {
    let (min, max) = DEFAULT_MAGNITUDE_RANGE;
    create_random_command_in_range(value, rng, min, max)
}

/// Random command on `value` with a magnitude in `[min, max]`
pub fn create_random_command_in_range<R: RandomRange + ?Sized>(
    value: &SharedValue,
    rng: &mut R,
    min: ValueType,
    max: ValueType,
) -> Box<dyn Command> {
    let kind = CommandKind::random(rng);
    let modification = rng.random_in_range(min, max);

    match kind {
        CommandKind::Lambda => Box::new(LambdaCommand::modify_value(value.clone(), modification)),
        CommandKind::Addition => Box::new(AdditionCommand::new(value.clone(), modification)),
        CommandKind::Subtraction => Box::new(SubtractCommand::new(value.clone(), modification)),
    }
}

/// Cloneable counterpart of `create_random_command`
pub fn create_random_value_command<R: RandomRange + ?Sized>(
    value: &SharedValue,
    rng: &mut R,
) -> ValueCommand {
    let (min, max) = DEFAULT_MAGNITUDE_RANGE;
    let kind = CommandKind::random(rng);
    let modification = rng.random_in_range(min, max);

    match kind {
        CommandKind::Lambda => SharedLambda::modify_value(value.clone(), modification).into(),
        CommandKind::Addition => AdditionCommand::new(value.clone(), modification).into(),
        CommandKind::Subtraction => SubtractCommand::new(value.clone(), modification).into(),
    }
}
