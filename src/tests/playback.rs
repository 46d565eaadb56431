use crate::playback::{ConsolePlayback, PlaybackStep, COMPLETE_HOLD_MS, LINE_INTERVAL_MS};

fn lines(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("LINE {i}")).collect()
}

const HOLD_TICKS: u32 = (COMPLETE_HOLD_MS / LINE_INTERVAL_MS) as u32;

#[test]
fn test_playback_yields_each_line_once_then_completes_once() {
    let mut playback = ConsolePlayback::new(lines(3));

    for i in 0..3 {
        assert_eq!(playback.tick(), PlaybackStep::Line(format!("LINE {i}")));
    }
    for _ in 0..HOLD_TICKS {
        assert_eq!(playback.tick(), PlaybackStep::Hold);
    }
    assert_eq!(playback.tick(), PlaybackStep::Done);
    assert!(playback.is_finished());

    for _ in 0..5 {
        assert_eq!(playback.tick(), PlaybackStep::Idle);
    }
}

#[test]
fn test_empty_playback_still_completes() {
    let mut playback = ConsolePlayback::new(vec![]);
    for _ in 0..HOLD_TICKS {
        assert_eq!(playback.tick(), PlaybackStep::Hold);
    }
    assert_eq!(playback.tick(), PlaybackStep::Done);
}

#[test]
fn test_cancelled_playback_never_completes() {
    let mut playback = ConsolePlayback::new(lines(5));
    assert!(matches!(playback.tick(), PlaybackStep::Line(_)));

    playback.cancel();
    assert!(playback.is_cancelled());

    for _ in 0..(HOLD_TICKS + 10) {
        assert_eq!(playback.tick(), PlaybackStep::Idle);
    }
    assert!(!playback.is_finished());
}

#[test]
fn test_cancel_after_done_is_harmless() {
    let mut playback = ConsolePlayback::new(lines(1));
    while playback.tick() != PlaybackStep::Done {}
    playback.cancel();
    assert_eq!(playback.tick(), PlaybackStep::Idle);
}
