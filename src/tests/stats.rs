use crate::stats::{StatsLedger, RECENT_MATCH_CAP, STATS_KEY};
use crate::storage::{MemoryStore, StoragePort};
use crate::types::MatchRecord;

fn record(winner: &str, correct: bool, timestamp_ms: i64) -> MatchRecord {
    MatchRecord {
        timestamp_ms,
        winner_name: winner.to_string(),
        loser_name: "Loser".to_string(),
        player_correct: correct,
        environment: "Rocky Mountain Pass".to_string(),
    }
}

#[test]
fn test_streak_accounting() {
    let mut store = MemoryStore::new();
    let mut ledger = StatsLedger::default();

    for i in 0..3 {
        ledger.record_result(record("Rex", true, i), &mut store);
    }
    assert_eq!(ledger.wins, 3);
    assert_eq!(ledger.current_streak, 3);
    assert_eq!(ledger.highest_streak, 3);

    ledger.record_result(record("Rex", false, 3), &mut store);
    assert_eq!(ledger.losses, 1);
    assert_eq!(ledger.current_streak, 0);
    assert_eq!(ledger.highest_streak, 3, "highest streak survives a loss");

    ledger.record_result(record("Rex", true, 4), &mut store);
    assert_eq!(ledger.current_streak, 1);
    assert_eq!(ledger.highest_streak, 3);
}

#[test]
fn test_ledger_invariants_over_mixed_sequences() {
    let mut store = MemoryStore::new();
    let mut ledger = StatsLedger::default();

    let results = [true, true, false, true, false, false, true, true, true, false];
    for (i, &correct) in results.iter().enumerate() {
        ledger.record_result(record("Rex", correct, i as i64), &mut store);
        assert!(ledger.highest_streak >= ledger.current_streak);
        assert_eq!(ledger.total_battles(), i as u32 + 1);
    }
}

#[test]
fn test_recent_matches_capped_and_ordered() {
    let mut store = MemoryStore::new();
    let mut ledger = StatsLedger::default();

    for i in 0..30 {
        ledger.record_result(record("Rex", true, i), &mut store);
    }

    assert_eq!(ledger.recent_matches.len(), RECENT_MATCH_CAP);
    // Most recent first; the oldest ten fell off the end.
    assert_eq!(ledger.recent_matches[0].timestamp_ms, 29);
    assert_eq!(ledger.recent_matches[RECENT_MATCH_CAP - 1].timestamp_ms, 10);
}

#[test]
fn test_discovery_records_each_winner_once() {
    let mut store = MemoryStore::new();
    let mut ledger = StatsLedger::default();

    ledger.record_result(record("Rex", true, 0), &mut store);
    ledger.record_result(record("Rex", false, 1), &mut store);
    ledger.record_result(record("Mosasaurus", false, 2), &mut store);

    assert_eq!(ledger.discovered, vec!["Rex", "Mosasaurus"]);
}

#[test]
fn test_load_merges_defaults_into_partial_document() {
    let mut store = MemoryStore::new();
    store.set(STATS_KEY, r#"{"wins":5}"#).unwrap();

    let ledger = StatsLedger::load(&store);
    assert_eq!(ledger.wins, 5);
    assert_eq!(ledger.losses, 0);
    assert_eq!(ledger.current_streak, 0);
    assert_eq!(ledger.highest_streak, 0);
    assert!(ledger.discovered.is_empty());
    assert!(ledger.recent_matches.is_empty());
}

#[test]
fn test_load_treats_corrupt_document_as_absent() {
    let mut store = MemoryStore::new();
    store.set(STATS_KEY, "{not json").unwrap();
    assert_eq!(StatsLedger::load(&store), StatsLedger::default());
}

#[test]
fn test_load_from_empty_store() {
    let store = MemoryStore::new();
    assert_eq!(StatsLedger::load(&store), StatsLedger::default());
}

#[test]
fn test_every_mutation_is_persisted() {
    let mut store = MemoryStore::new();
    let mut ledger = StatsLedger::default();

    ledger.record_result(record("Rex", true, 0), &mut store);
    assert_eq!(StatsLedger::load(&store), ledger);

    ledger.record_result(record("Mosasaurus", false, 1), &mut store);
    assert_eq!(StatsLedger::load(&store), ledger);
}

#[test]
fn test_wire_format_keeps_legacy_field_names() {
    let mut store = MemoryStore::new();
    let mut ledger = StatsLedger::default();
    ledger.record_result(record("Rex", true, 0), &mut store);

    let raw = store.get(STATS_KEY).expect("ledger was written");
    assert!(raw.contains("\"dinosDiscovered\""));
    assert!(raw.contains("\"isPlayerCorrect\""));
    assert!(raw.contains("\"currentStreak\""));
    assert!(raw.contains("\"timestamp\""));
}
