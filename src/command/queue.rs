// CommandQueue - Linear undo/redo buffer with an explicit cursor

use crate::command::trait_def::{Command, CommandError};
use std::fmt;
use tracing::{debug, trace, warn};

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

/// Errors returned by CommandQueue
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    /// `execute_command` or `clear_pending_commands` with nothing pending
    #[error("No pending command")]
    NoPendingCommand,

    /// `rollback_command` with nothing executed
    #[error("No command to roll back")]
    NoPendingRollback,

    /// The command itself failed; the cursor was left where it was
    #[error("Command failed: {0}")]
    Command(#[from] CommandError),
}

/// Ordered sequence of commands plus a cursor
///
/// The cursor (`command_index()`) splits the sequence in two:
/// - `[0, index)`: commands that have been executed and can be rolled back
/// - `[index, len)`: commands that have been queued but not executed yet
///
/// Nothing runs on its own. The caller queues commands and then steps the
/// cursor forward with `execute_command()` or back with `rollback_command()`.
///
/// Queueing never discards the pending tail. After a rollback, commands that
/// were rolled back stay ahead of the cursor and will be executed again
/// before anything queued later. Call `clear_pending_commands()` before
/// queueing to start a new timeline instead.
///
/// The queue is generic over the command type. `Box<dyn Command>` (the
/// default) accepts any command; a closed enum such as `ValueCommand`
/// makes the whole queue cloneable.
pub struct CommandQueue<C: Command = Box<dyn Command>> {
    /// Every queued command, oldest first
    commands: Vec<C>,

    /// Number of applied commands at the front of `commands`
    index: usize,
}

impl<C: Command> CommandQueue<C> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty queue with room for `capacity` commands
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
            index: 0,
        }
    }

    /// Append a command after every queued command
    ///
    /// The cursor does not move.
    pub fn queue_command(&mut self, command: C) {
        trace!(command = %command.description(), position = self.commands.len(), "Queue command");
        self.commands.push(command);
        self.debug_check_invariants();
    }

    /// Execute the command under the cursor and move the cursor forward
    ///
    /// # Errors
    /// - `NoPendingCommand` if `has_pending_command()` is false
    /// - `Command` if the command's execute failed; the cursor is not advanced
    pub fn execute_command(&mut self) -> QueueResult<()> {
        if !self.has_pending_command() {
            return Err(QueueError::NoPendingCommand);
        }

        let command = &mut self.commands[self.index];
        debug!(command = %command.description(), index = self.index, "Execute command");
        command.execute()?;

        self.index += 1;
        self.debug_check_invariants();
        Ok(())
    }

    /// Move the cursor back and roll back the command it lands on
    ///
    /// # Errors
    /// - `NoPendingRollback` if `has_pending_rollback_command()` is false
    /// - `Command` if the command's rollback failed; the cursor is restored
    pub fn rollback_command(&mut self) -> QueueResult<()> {
        if !self.has_pending_rollback_command() {
            return Err(QueueError::NoPendingRollback);
        }

        self.index -= 1;
        let command = &mut self.commands[self.index];
        debug!(command = %command.description(), index = self.index, "Rollback command");

        if let Err(e) = command.rollback() {
            warn!(error = %e, index = self.index, "Rollback failed, command stays applied");
            self.index += 1;
            return Err(e.into());
        }

        self.debug_check_invariants();
        Ok(())
    }

    /// Drop every command, executed or not, and reset the cursor
    ///
    /// Executed commands are not rolled back first.
    pub fn clear_queue(&mut self) {
        debug!(size = self.commands.len(), index = self.index, "Clear command queue");
        self.commands.clear();
        self.index = 0;
    }

    /// Remove every command at or after the cursor
    ///
    /// Executed commands and the cursor are untouched. This is how a caller
    /// invalidates the redo tail before queueing a new command.
    ///
    /// # Errors
    /// Returns `NoPendingCommand` if `has_pending_command()` is false.
    pub fn clear_pending_commands(&mut self) -> QueueResult<()> {
        if !self.has_pending_command() {
            return Err(QueueError::NoPendingCommand);
        }

        debug!(removed = self.pending_count(), index = self.index, "Clear pending commands");
        self.commands.truncate(self.index);
        self.debug_check_invariants();
        Ok(())
    }

    /// Check if there is a command to execute
    pub fn has_pending_command(&self) -> bool {
        self.commands.len() > self.index
    }

    /// Check if there is a command to roll back
    pub fn has_pending_rollback_command(&self) -> bool {
        self.index != 0 && self.commands.len() >= self.index
    }

    /// Position of the cursor (number of applied commands)
    pub fn command_index(&self) -> usize {
        self.index
    }

    /// Number of queued commands, executed or not
    pub fn command_queue_size(&self) -> usize {
        self.commands.len()
    }

    /// Check if the queue holds no commands
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of commands ahead of the cursor
    pub fn pending_count(&self) -> usize {
        self.commands.len().saturating_sub(self.index)
    }

    /// Number of commands behind the cursor
    pub fn rollback_count(&self) -> usize {
        self.index
    }

    /// Description of the command `execute_command()` would run
    pub fn pending_description(&self) -> Option<String> {
        self.commands.get(self.index).map(|cmd| cmd.description())
    }

    /// Description of the command `rollback_command()` would run
    pub fn rollback_description(&self) -> Option<String> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.commands.get(i))
            .map(|cmd| cmd.description())
    }

    /// Execute until nothing is pending
    ///
    /// Returns the number of commands executed. Stops at the first failure.
    pub fn execute_all_pending(&mut self) -> QueueResult<usize> {
        let mut executed = 0;
        while self.has_pending_command() {
            self.execute_command()?;
            executed += 1;
        }
        Ok(executed)
    }

    /// Roll back until nothing is rollback-pending
    ///
    /// Returns the number of commands rolled back. Stops at the first failure.
    pub fn rollback_all(&mut self) -> QueueResult<usize> {
        let mut rolled_back = 0;
        while self.has_pending_rollback_command() {
            self.rollback_command()?;
            rolled_back += 1;
        }
        Ok(rolled_back)
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            self.index <= self.commands.len(),
            "cursor {} past end of queue (len {})",
            self.index,
            self.commands.len()
        );
    }
}

impl CommandQueue<Box<dyn Command>> {
    /// Box `command` and queue it
    pub fn queue<T: Command + 'static>(&mut self, command: T) {
        self.queue_command(Box::new(command));
    }
}

impl<C: Command> Default for CommandQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Command + Clone> Clone for CommandQueue<C> {
    fn clone(&self) -> Self {
        Self {
            commands: self.commands.clone(),
            index: self.index,
        }
    }
}

impl<C: Command> fmt::Debug for CommandQueue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandQueue")
            .field("index", &self.index)
            .field("size", &self.commands.len())
            .finish()
    }
}
