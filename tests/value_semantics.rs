//! Queue of cloneable `ValueCommand`s
//!
//! Same protocol as the boxed queue, plus copying: a cloned queue keeps its
//! own cursor and command list while still modifying the shared value.

use command_queue::{
    AdditionCommand, CommandQueue, ModifyValueCommand, SharedLambda, SharedValue, ValueCommand,
    create_random_value_command,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn modify(value: &SharedValue, modification: i32) -> ValueCommand {
    ModifyValueCommand::new(value.clone(), modification).into()
}

fn lambda(value: &SharedValue, modification: i32) -> ValueCommand {
    SharedLambda::modify_value(value.clone(), modification).into()
}

#[test]
fn test_value_queue_execute_and_rollback() {
    let value = SharedValue::new();
    let mut queue: CommandQueue<ValueCommand> = CommandQueue::new();

    queue.queue_command(lambda(&value, 1));
    queue.queue_command(modify(&value, 2));
    queue.queue_command(lambda(&value, 3));

    queue.execute_all_pending().unwrap();
    assert_eq!(value.value(), 6);
    assert_eq!(queue.command_index(), 3);

    queue.rollback_command().unwrap();
    assert_eq!(value.value(), 3);
    assert_eq!(queue.rollback_description().as_deref(), Some("Modify by 2"));

    queue.rollback_all().unwrap();
    assert_eq!(value.value(), 0);
    assert_eq!(queue.command_queue_size(), 3);
}

#[test]
fn test_cloned_queue_has_independent_cursor() {
    let value = SharedValue::new();
    let mut queue: CommandQueue<ValueCommand> = CommandQueue::new();
    queue.queue_command(modify(&value, 10));
    queue.queue_command(AdditionCommand::new(value.clone(), 5).into());
    queue.execute_command().unwrap();

    let mut copy = queue.clone();
    assert_eq!(copy.command_index(), 1);
    assert_eq!(copy.command_queue_size(), 2);

    copy.execute_command().unwrap();
    assert_eq!(value.value(), 15);
    assert_eq!(queue.command_index(), 1);
    assert_eq!(copy.command_index(), 2);

    copy.clear_queue();
    assert_eq!(queue.command_queue_size(), 2);

    queue.rollback_command().unwrap();
    assert_eq!(value.value(), 5);
}

#[test]
fn test_random_value_commands_round_trip() {
    let value = SharedValue::new();
    let mut rng = StdRng::seed_from_u64(5);
    let mut queue: CommandQueue<ValueCommand> = CommandQueue::with_capacity(100);

    for _ in 0..100 {
        queue.queue_command(create_random_value_command(&value, &mut rng));
    }

    queue.execute_all_pending().unwrap();
    queue.rollback_all().unwrap();
    assert_eq!(value.value(), 0);
    assert!(queue.has_pending_command());
    assert!(!queue.has_pending_rollback_command());
}
