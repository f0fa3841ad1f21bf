use std::error::Error;
use std::time::{Duration, Instant};

use logfx::engine::DelayQueue;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn drain_removes_due_entries_and_leaves_later_ones() -> TestResult {
    let base = Instant::now();
    let mut queue = DelayQueue::new();

    queue.schedule(base + Duration::from_secs(1), "early.wav".to_string());
    queue.schedule(base + Duration::from_secs(5), "late.wav".to_string());

    let mut fired = queue.drain_due(base + Duration::from_secs(2));
    fired.sort();
    assert_eq!(fired, vec!["early.wav".to_string()]);
    assert_eq!(queue.len(), 1);

    let fired = queue.drain_due(base + Duration::from_secs(5));
    assert_eq!(fired, vec!["late.wav".to_string()]);
    assert!(queue.is_empty());

    Ok(())
}

#[test]
fn entries_due_exactly_at_now_fire() -> TestResult {
    let base = Instant::now();
    let mut queue = DelayQueue::new();

    queue.schedule(base + Duration::from_secs(3), "ping.wav".to_string());

    assert!(queue.drain_due(base + Duration::from_millis(2_999)).is_empty());
    assert_eq!(queue.drain_due(base + Duration::from_secs(3)).len(), 1);

    Ok(())
}

#[test]
fn equal_time_entries_all_fire_in_one_drain() -> TestResult {
    let base = Instant::now();
    let due = base + Duration::from_secs(1);
    let mut queue = DelayQueue::new();

    queue.schedule(due, "a.wav".to_string());
    queue.schedule(due, "b.wav".to_string());
    queue.schedule(due, "c.wav".to_string());

    let mut fired = queue.drain_due(due);
    fired.sort();
    assert_eq!(
        fired,
        vec!["a.wav".to_string(), "b.wav".to_string(), "c.wav".to_string()]
    );
    assert!(queue.is_empty());

    Ok(())
}

#[test]
fn drain_on_empty_queue_is_a_no_op() -> TestResult {
    let mut queue = DelayQueue::new();
    assert!(queue.drain_due(Instant::now()).is_empty());
    assert!(queue.is_empty());

    Ok(())
}

#[test]
fn scheduling_between_drains_keeps_undrained_entries() -> TestResult {
    let base = Instant::now();
    let mut queue = DelayQueue::new();

    queue.schedule(base + Duration::from_secs(1), "first.wav".to_string());
    assert_eq!(queue.drain_due(base + Duration::from_secs(1)).len(), 1);

    queue.schedule(base + Duration::from_secs(10), "second.wav".to_string());
    assert!(queue.drain_due(base + Duration::from_secs(5)).is_empty());
    assert_eq!(queue.len(), 1);

    Ok(())
}
