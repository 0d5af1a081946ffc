// Command Queue - Library exports for the demo binary, tests and benchmarks

pub mod command;
pub mod config;
pub mod demo;
pub mod random;

// Re-export commonly used types for convenience
pub use command::commands::{AdditionCommand, LambdaCommand, ModifyValueCommand, SubtractCommand};
pub use command::factory::{create_random_command, create_random_value_command};
pub use command::value::SharedLambda;
pub use command::{
    Command, CommandError, CommandQueue, CommandResult, QueueError, QueueResult, SharedValue,
    ValueCommand,
};
pub use config::{ConfigError, DemoConfig};
pub use demo::{DemoError, DemoReport, run_demo};
pub use random::RandomRange;
