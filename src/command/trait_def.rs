// Command trait definition

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur while applying a command's effect
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Forward effect failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// Inverse effect failed
    #[error("Rollback failed: {0}")]
    RollbackFailed(String),

    /// The state the command targets cannot be modified right now
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// A reversible operation
///
/// `execute()` applies the forward effect, `rollback()` applies its exact
/// inverse. Running one after the other restores whatever external state
/// the command touches.
///
/// The queue only calls `rollback()` on a command it has executed, so
/// implementations don't need to guard against an unmatched rollback.
///
/// # Example
/// ```
/// use command_queue::command::trait_def::{Command, CommandResult};
/// use command_queue::command::state::SharedValue;
///
/// struct DoubleCommand {
///     value: SharedValue,
///     added: Option<i32>,
/// }
///
/// impl Command for DoubleCommand {
///     fn execute(&mut self) -> CommandResult<()> {
///         let current = self.value.value();
///         self.value.add(current)?;
///         self.added = Some(current);
///         Ok(())
///     }
///
///     fn rollback(&mut self) -> CommandResult<()> {
///         if let Some(added) = self.added.take() {
///             self.value.subtract(added)?;
///         }
///         Ok(())
///     }
///
///     fn description(&self) -> String {
///         "Double".to_string()
///     }
/// }
/// ```
pub trait Command {
    /// Apply the forward effect
    fn execute(&mut self) -> CommandResult<()>;

    /// Undo the effect of the most recent `execute()`
    fn rollback(&mut self) -> CommandResult<()>;

    /// Human-readable label, used for logging and display
    fn description(&self) -> String;
}

impl<C: Command + ?Sized> Command for Box<C> {
    fn execute(&mut self) -> CommandResult<()> {
        (**self).execute()
    }

    fn rollback(&mut self) -> CommandResult<()> {
        (**self).rollback()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}
