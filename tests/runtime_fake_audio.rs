mod common;

use std::error::Error;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use logfx_test_utils::builders::ConfigTextBuilder;
use logfx_test_utils::fake_audio::FakeAudioBackend;
use logfx_test_utils::init_tracing;

use logfx::audio::Player;
use logfx::config::load_and_validate;
use logfx::engine::{PollCore, PollRuntime};
use logfx::watch::{LogTailer, WatchRegistry};

type TestResult = Result<(), Box<dyn Error>>;

struct Fixture {
    _dir: tempfile::TempDir,
    log: PathBuf,
    runtime: PollRuntime,
    played: Arc<Mutex<Vec<String>>>,
}

/// One watched file with one binding, wired to a fake audio backend.
fn fixture(pattern: &str, action: &str, options: &[&str], failing_loads: bool) -> Fixture {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = dir.path().join("watched.log");
    common::touch(&log);

    let text = ConfigTextBuilder::new()
        .record(log.to_str().unwrap(), pattern, action, options)
        .build();
    let config = dir.path().join("logfx.conf");
    std::fs::write(&config, text).expect("write config");

    let records = load_and_validate(&config).expect("valid config");
    let registry = WatchRegistry::from_records(&records).expect("valid records");

    let played = Arc::new(Mutex::new(Vec::new()));
    let backend = if failing_loads {
        FakeAudioBackend::failing_loads(played.clone())
    } else {
        FakeAudioBackend::new(played.clone())
    };
    let player = Player::with_backend(Box::new(backend), registry.action_ids());

    let tailers = registry
        .files()
        .iter()
        .map(|f| LogTailer::open(&f.path))
        .collect::<logfx::errors::Result<Vec<_>>>()
        .expect("open tailers");

    let runtime = PollRuntime::new(PollCore::new(registry), tailers, player);

    Fixture {
        _dir: dir,
        log,
        runtime,
        played,
    }
}

#[test]
fn matching_line_triggers_the_action_exactly_once() -> TestResult {
    init_tracing();

    // Scenario: <log>,ERROR,alarm.wav,noecho
    let mut fx = fixture("ERROR", "alarm.wav", &["noecho"], false);

    // Nothing appended yet.
    fx.runtime.poll_once(Instant::now());
    assert!(fx.played.lock().unwrap().is_empty());

    common::append_line(&fx.log, "2024 ERROR disk full");
    fx.runtime.poll_once(Instant::now());
    assert_eq!(*fx.played.lock().unwrap(), vec!["alarm.wav".to_string()]);

    // The line was consumed; later ticks stay quiet.
    fx.runtime.poll_once(Instant::now());
    assert_eq!(fx.played.lock().unwrap().len(), 1);

    Ok(())
}

#[test]
fn unmatched_lines_trigger_nothing() -> TestResult {
    init_tracing();

    let mut fx = fixture("ERROR", "alarm.wav", &[], false);

    common::append_line(&fx.log, "INFO all good");
    fx.runtime.poll_once(Instant::now());
    assert!(fx.played.lock().unwrap().is_empty());

    Ok(())
}

#[test]
fn delayed_action_fires_at_a_tick_past_its_trigger_time() -> TestResult {
    init_tracing();

    // Scenario: <log>,Wait ([0-9]+) sec,ping.wav,delay
    let mut fx = fixture("Wait ([0-9]+) sec", "ping.wav", &["delay"], false);

    let t0 = Instant::now();
    common::append_line(&fx.log, "Wait 3 sec");
    fx.runtime.poll_once(t0);

    // Queued, not played.
    assert!(fx.played.lock().unwrap().is_empty());
    assert_eq!(fx.runtime.core().pending_actions(), 1);

    // A tick before the trigger time does nothing.
    fx.runtime.poll_once(t0 + Duration::from_secs(2));
    assert!(fx.played.lock().unwrap().is_empty());

    // The first tick at/after t0 + 3s plays it, exactly once.
    fx.runtime.poll_once(t0 + Duration::from_secs(4));
    assert_eq!(*fx.played.lock().unwrap(), vec!["ping.wav".to_string()]);

    fx.runtime.poll_once(t0 + Duration::from_secs(10));
    assert_eq!(fx.played.lock().unwrap().len(), 1);

    Ok(())
}

#[test]
fn one_line_matching_two_bindings_plays_both_actions() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let log = dir.path().join("watched.log");
    common::touch(&log);

    let text = ConfigTextBuilder::new()
        .record(log.to_str().unwrap(), "ERROR", "alarm.wav", &[])
        .record(log.to_str().unwrap(), "disk", "click.wav", &["noecho"])
        .build();
    let config = dir.path().join("logfx.conf");
    std::fs::write(&config, text)?;

    let records = load_and_validate(&config)?;
    let registry = WatchRegistry::from_records(&records)?;

    let played = Arc::new(Mutex::new(Vec::new()));
    let backend = FakeAudioBackend::new(played.clone());
    let player = Player::with_backend(Box::new(backend), registry.action_ids());
    let tailers = registry
        .files()
        .iter()
        .map(|f| LogTailer::open(&f.path))
        .collect::<logfx::errors::Result<Vec<_>>>()?;
    let mut runtime = PollRuntime::new(PollCore::new(registry), tailers, player);

    common::append_line(&log, "ERROR disk full");
    runtime.poll_once(Instant::now());

    assert_eq!(
        *played.lock().unwrap(),
        vec!["alarm.wav".to_string(), "click.wav".to_string()]
    );

    Ok(())
}

#[test]
fn failed_resource_loads_fall_back_without_crashing() -> TestResult {
    init_tracing();

    let mut fx = fixture("ERROR", "alarm.wav", &[], true);

    // The catalog is empty because every load failed.
    common::append_line(&fx.log, "ERROR again");
    fx.runtime.poll_once(Instant::now());

    // The backend was never asked to play; the bell fallback fired instead
    // and the loop carried on.
    assert!(fx.played.lock().unwrap().is_empty());

    Ok(())
}
