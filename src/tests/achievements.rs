use crate::achievements::{earned_now, Achievement, BattleContext};
use crate::stats::StatsLedger;
use crate::tests::*;
use crate::types::Element;

#[test]
fn test_streak_badges() {
    let mut stats = StatsLedger::default();
    assert!(!Achievement::FirstDiscovery.earned(&stats, None));

    stats.wins = 1;
    stats.current_streak = 1;
    assert!(Achievement::FirstDiscovery.earned(&stats, None));
    assert!(!Achievement::ApexPredator.earned(&stats, None));

    stats.current_streak = 3;
    assert!(Achievement::ApexPredator.earned(&stats, None));
    assert!(!Achievement::DinoDominator.earned(&stats, None));

    stats.current_streak = 10;
    assert!(Achievement::DinoDominator.earned(&stats, None));
}

#[test]
fn test_paleontologist_counts_discoveries() {
    let mut stats = StatsLedger::default();
    stats.discovered = (0..9).map(|i| format!("Dino {i}")).collect();
    assert!(!Achievement::Paleontologist.earned(&stats, None));

    stats.discovered.push("Dino 9".to_string());
    assert!(Achievement::Paleontologist.earned(&stats, None));
}

#[test]
fn test_battle_scoped_badges_need_a_correct_pick() {
    let stats = StatsLedger::default();
    let david = dino("David", 1.8, 55.0, 7.0, Element::Earth);
    let goliath = dino("Goliath", 12.0, 25.0, 9.0, Element::Earth);

    let upset = BattleContext {
        winner: &david,
        loser: &goliath,
        correct: true,
    };
    assert!(Achievement::GiantSlayer.earned(&stats, Some(&upset)));
    assert!(Achievement::SpeedDemon.earned(&stats, Some(&upset)));
    assert!(Achievement::TinyTerror.earned(&stats, Some(&upset)));

    let missed = BattleContext {
        correct: false,
        ..upset
    };
    assert!(!Achievement::GiantSlayer.earned(&stats, Some(&missed)));
    assert!(!Achievement::SpeedDemon.earned(&stats, Some(&missed)));
    assert!(!Achievement::TinyTerror.earned(&stats, Some(&missed)));

    let expected = BattleContext {
        winner: &goliath,
        loser: &david,
        correct: true,
    };
    assert!(!Achievement::GiantSlayer.earned(&stats, Some(&expected)));
    assert!(!Achievement::TinyTerror.earned(&stats, Some(&expected)));

    // Without a battle in scope the battle badges stay locked.
    assert!(!Achievement::GiantSlayer.earned(&stats, None));
}

#[test]
fn test_earned_now_collects_satisfied_badges() {
    let mut stats = StatsLedger::default();
    stats.wins = 4;
    stats.current_streak = 4;
    stats.highest_streak = 4;

    let earned = earned_now(&stats, None);
    assert_eq!(
        earned,
        vec![Achievement::FirstDiscovery, Achievement::ApexPredator]
    );
}
