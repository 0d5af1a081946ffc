// Command Pattern for undo/redo
//
// This module implements a linear command queue: commands are appended, then
// executed forward and rolled back in reverse by moving a single cursor.
//
// Architecture:
// - Command trait: Defines execute(), rollback(), description()
// - CommandQueue: Owns the commands and the cursor
// - Concrete commands: LambdaCommand, AdditionCommand, SubtractCommand, ...
// - ValueCommand: Closed, cloneable set of the concrete commands
//
// Commands modify state they share with the caller (SharedValue); the queue
// owns the commands but never the state they modify.

pub mod commands;
pub mod factory;
pub mod queue;
pub mod state;
pub mod trait_def;
pub mod value;

pub use queue::{CommandQueue, QueueError, QueueResult};
pub use state::SharedValue;
pub use trait_def::{Command, CommandError, CommandResult};
pub use value::ValueCommand;
