//! Integration tests for the timer engine running under real tokio timers.
//!
//! These drive the state machine through its public channel interface the
//! way the frontend does, with short real-time waits in the style of the
//! unit timing tests.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::{sleep, timeout, Duration};

use pomodorino::engine::{Command, EngineEvent, PomodoroStateMachine, Signal};
use pomodorino::sound::MockSoundPlayer;
use pomodorino::types::TimerPhase;

type EventRx = mpsc::UnboundedReceiver<EngineEvent>;
type SignalTx = mpsc::UnboundedSender<Signal>;

fn spawn_engine() -> (
    Arc<MockSoundPlayer>,
    SignalTx,
    EventRx,
    tokio::task::JoinHandle<anyhow::Result<()>>,
) {
    let sound = Arc::new(MockSoundPlayer::new());
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (mut machine, signal_tx) =
        PomodoroStateMachine::new(Arc::clone(&sound), PathBuf::from("alarm.wav"), event_tx);
    let handle = tokio::spawn(async move { machine.run().await });
    (sound, signal_tx, event_rx, handle)
}

fn drain(rx: &mut EventRx) -> Vec<EngineEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_started_engine_emits_countdown_ticks() {
    let (_sound, signal_tx, mut event_rx, handle) = spawn_engine();

    signal_tx
        .send(Signal::Command(Command::ToggleStart))
        .unwrap();

    // Wait for a bit over two seconds of real countdown.
    sleep(Duration::from_millis(2300)).await;

    signal_tx.send(Signal::Command(Command::Shutdown)).unwrap();
    timeout(Duration::from_secs(1), handle)
        .await
        .unwrap()
        .unwrap()
        .unwrap();

    let updates: Vec<String> = drain(&mut event_rx)
        .into_iter()
        .filter_map(|event| match event {
            EngineEvent::DisplayUpdate { time } => Some(time),
            _ => None,
        })
        .collect();

    // Initial 25:00 plus roughly two tick updates.
    assert!(updates.contains(&"25:00".to_string()));
    assert!(updates.contains(&"24:59".to_string()));
    assert!(updates.len() >= 3, "expected >= 3 updates, got {:?}", updates);
}

#[tokio::test]
async fn test_paused_engine_emits_no_ticks() {
    let (_sound, signal_tx, mut event_rx, handle) = spawn_engine();

    signal_tx
        .send(Signal::Command(Command::ToggleStart))
        .unwrap();
    signal_tx
        .send(Signal::Command(Command::ToggleStart))
        .unwrap();

    // Give the engine time to process both toggles, then drain the initial
    // events before watching for stray ticks.
    sleep(Duration::from_millis(200)).await;
    drain(&mut event_rx);

    sleep(Duration::from_millis(1500)).await;

    assert!(
        drain(&mut event_rx).is_empty(),
        "no events expected while paused"
    );

    signal_tx.send(Signal::Command(Command::Shutdown)).unwrap();
    timeout(Duration::from_secs(1), handle)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn test_reset_stops_countdown() {
    let (_sound, signal_tx, mut event_rx, handle) = spawn_engine();

    signal_tx
        .send(Signal::Command(Command::ToggleStart))
        .unwrap();
    sleep(Duration::from_millis(1200)).await;

    signal_tx.send(Signal::Command(Command::Reset)).unwrap();
    sleep(Duration::from_millis(200)).await;
    drain(&mut event_rx);

    sleep(Duration::from_millis(1500)).await;
    assert!(
        drain(&mut event_rx).is_empty(),
        "no events expected after reset"
    );

    signal_tx.send(Signal::Command(Command::Shutdown)).unwrap();
    timeout(Duration::from_secs(1), handle)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn test_begin_break_outside_alert_changes_nothing() {
    let (sound, signal_tx, mut event_rx, handle) = spawn_engine();

    sleep(Duration::from_millis(100)).await;
    drain(&mut event_rx);

    signal_tx
        .send(Signal::Command(Command::BeginBreak))
        .unwrap();
    sleep(Duration::from_millis(200)).await;

    assert!(drain(&mut event_rx).is_empty());
    assert_eq!(sound.play_count(), 0);
    assert_eq!(sound.stop_count(), 0);

    signal_tx.send(Signal::Command(Command::Shutdown)).unwrap();
    timeout(Duration::from_secs(1), handle)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn test_shutdown_stops_sound_and_terminates() {
    let (sound, signal_tx, mut event_rx, handle) = spawn_engine();

    signal_tx.send(Signal::Command(Command::Shutdown)).unwrap();

    let result = timeout(Duration::from_secs(1), handle).await.unwrap();
    assert!(result.unwrap().is_ok());
    assert_eq!(sound.stop_count(), 1);

    // Initial pair was still emitted before shutdown.
    let events = drain(&mut event_rx);
    assert!(events.contains(&EngineEvent::PhaseChanged {
        phase: TimerPhase::Work
    }));
}
