// Random command demo
//
// Each step either rolls back the most recent command or starts a new
// timeline: stale pending commands are pruned, then a random command is
// queued and executed. This exercises every queue operation against one
// shared value.

use crate::command::factory::create_random_command_in_range;
use crate::command::state::ValueType;
use crate::command::{CommandQueue, QueueError, SharedValue};
use crate::config::{ConfigError, DemoConfig};
use crate::random::RandomRange;
use serde::Serialize;
use tracing::{debug, info};

/// Demo error types
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Queue error: {0}")]
    Queue(#[from] QueueError),
}

/// Summary of a demo run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    /// Commands queued and executed
    pub executed: usize,
    /// Commands rolled back, including the final rollback pass
    pub rolled_back: usize,
    /// Pending commands discarded before queueing a new one
    pub pruned: usize,
    /// Value of the shared cell when the demo ended
    pub final_value: ValueType,
    /// Largest value observed after any step, which may be negative
    pub peak_value: ValueType,
    /// Commands left in the queue
    pub queue_size: usize,
    /// Cursor position when the demo ended
    pub command_index: usize,
}

/// Run the demo described by `config` using `rng` for every random choice
pub fn run_demo<R: RandomRange + ?Sized>(
    config: &DemoConfig,
    rng: &mut R,
) -> Result<DemoReport, DemoError> {
    config.validate()?;

    let value = SharedValue::new();
    let mut queue: CommandQueue = CommandQueue::new();
    // Every run has at least one step, so the peak is always overwritten
    let mut report = DemoReport {
        peak_value: ValueType::MIN,
        ..DemoReport::default()
    };

    info!(iterations = config.iterations, "Starting command queue demo");

    for step in 0..config.iterations {
        if queue.has_pending_rollback_command() && rng.chance(config.rollback_probability) {
            queue.rollback_command()?;
            report.rolled_back += 1;
        } else {
            if queue.has_pending_command() {
                report.pruned += queue.pending_count();
                queue.clear_pending_commands()?;
            }

            let command = create_random_command_in_range(
                &value,
                rng,
                config.min_magnitude,
                config.max_magnitude,
            );
            queue.queue_command(command);
            queue.execute_command()?;
            report.executed += 1;
        }

        report.peak_value = report.peak_value.max(value.value());
        debug!(
            step,
            value = value.value(),
            index = queue.command_index(),
            size = queue.command_queue_size(),
            "Demo step"
        );
    }

    if config.rollback_all {
        report.rolled_back += queue.rollback_all()?;
    }

    report.final_value = value.value();
    report.queue_size = queue.command_queue_size();
    report.command_index = queue.command_index();

    info!(
        executed = report.executed,
        rolled_back = report.rolled_back,
        pruned = report.pruned,
        final_value = report.final_value,
        "Demo finished"
    );

    Ok(report)
}
