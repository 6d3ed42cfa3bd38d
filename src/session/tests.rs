//! Unit tests for the scoring session

use super::*;
use crate::cli::types::stat::Direction::{Decrement, Increment};

fn player(id: &str, number: &str) -> PlayerIdentity {
    PlayerIdentity {
        id: PlayerId::new(id),
        number: number.to_string(),
    }
}

fn two_player_session() -> StatSession {
    StatSession::new(
        TeamId::new("T"),
        vec![player("A", "4"), player("B", "7")],
    )
}

/// Small deterministic generator so long event sequences are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[(self.next() as usize) % items.len()]
    }
}

#[test]
fn test_new_session_covers_roster_with_zeroes() {
    let session = two_player_session();

    assert_eq!(session.records().len(), 2);
    assert!(session.records().values().all(PlayerStatRecord::is_zero));
    assert_eq!(session.total_score(), 0);
    assert!(session.active_player().is_none());
}

#[test]
fn test_apply_stat_without_selection_is_noop() {
    let mut session = two_player_session();

    assert!(!session.apply_stat(StatKind::ThreePoints, Increment));
    assert_eq!(session.total_score(), 0);
    assert!(session.records().values().all(PlayerStatRecord::is_zero));
}

#[test]
fn test_increment_weighted_stat_moves_score() {
    let mut session = two_player_session();
    session.select_player(Some(&PlayerId::new("A")));

    assert!(session.apply_stat(StatKind::ThreePoints, Increment));
    assert!(session.apply_stat(StatKind::FreeThrow, Increment));

    assert_eq!(session.total_score(), 4);
    assert_eq!(session.current_count(StatKind::ThreePoints), 1);
    assert_eq!(session.player_points(&PlayerId::new("A")), 4);
}

#[test]
fn test_increment_unweighted_stat_keeps_score() {
    let mut session = two_player_session();
    session.select_player(Some(&PlayerId::new("A")));

    session.apply_stat(StatKind::Rebound, Increment);
    session.apply_stat(StatKind::Foul, Increment);

    assert_eq!(session.total_score(), 0);
    assert_eq!(session.current_count(StatKind::Rebound), 1);
    assert_eq!(session.current_count(StatKind::Foul), 1);
}

#[test]
fn test_decrement_at_zero_is_clamped() {
    let mut session = two_player_session();
    session.select_player(Some(&PlayerId::new("A")));

    assert!(!session.apply_stat(StatKind::TwoPoints, Decrement));

    assert_eq!(session.current_count(StatKind::TwoPoints), 0);
    assert_eq!(session.total_score(), 0);
}

#[test]
fn test_repeated_decrement_at_floor_leaves_state_identical() {
    let mut session = two_player_session();
    session.select_player(Some(&PlayerId::new("A")));
    session.apply_stat(StatKind::ThreePoints, Increment);
    session.apply_stat(StatKind::ThreePoints, Decrement);

    let before = session.snapshot();
    for _ in 0..10 {
        session.apply_stat(StatKind::ThreePoints, Decrement);
        session.apply_stat(StatKind::Steal, Decrement);
    }

    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_decrement_removes_weight() {
    let mut session = two_player_session();
    session.select_player(Some(&PlayerId::new("B")));
    session.apply_stat(StatKind::TwoPoints, Increment);
    session.apply_stat(StatKind::TwoPoints, Increment);

    assert!(session.apply_stat(StatKind::TwoPoints, Decrement));

    assert_eq!(session.total_score(), 2);
    assert_eq!(session.current_count(StatKind::TwoPoints), 1);
}

#[test]
fn test_selecting_active_player_toggles_off() {
    let mut session = two_player_session();
    let a = PlayerId::new("A");

    session.select_player(Some(&a));
    assert_eq!(session.active_player(), Some(&a));

    session.select_player(Some(&a));
    assert!(session.active_player().is_none());

    assert!(!session.apply_stat(StatKind::ThreePoints, Increment));
    assert_eq!(session.total_score(), 0);
}

#[test]
fn test_selecting_other_player_switches() {
    let mut session = two_player_session();
    session.select_player(Some(&PlayerId::new("A")));
    session.select_player(Some(&PlayerId::new("B")));

    assert_eq!(session.active_player(), Some(&PlayerId::new("B")));
}

#[test]
fn test_selecting_unknown_player_clears_selection() {
    let mut session = two_player_session();
    session.select_player(Some(&PlayerId::new("A")));

    session.select_player(Some(&PlayerId::new("ghost")));

    assert!(session.active_player().is_none());
    assert_eq!(session.current_count(StatKind::Assist), 0);
    assert!(!session.apply_stat(StatKind::Assist, Increment));
}

#[test]
fn test_select_none_clears_selection() {
    let mut session = two_player_session();
    session.select_player(Some(&PlayerId::new("A")));
    session.select_player(None);

    assert!(session.active_player().is_none());
}

#[test]
fn test_current_count_without_selection_is_zero() {
    let mut session = two_player_session();
    session.select_player(Some(&PlayerId::new("A")));
    session.apply_stat(StatKind::Block, Increment);
    session.select_player(None);

    assert_eq!(session.current_count(StatKind::Block), 0);
}

#[test]
fn test_player_by_number() {
    let session = two_player_session();

    assert_eq!(session.player_by_number("#7"), Some(&PlayerId::new("B")));
    assert_eq!(session.player_by_number("4"), Some(&PlayerId::new("A")));
    assert_eq!(session.player_by_number("99"), None);
}

#[test]
fn test_end_to_end_scenario_then_clear() {
    let mut session = two_player_session();
    let a = PlayerId::new("A");
    let b = PlayerId::new("B");

    session.select_player(Some(&a));
    session.apply_stat(StatKind::ThreePoints, Increment);
    assert_eq!(session.total_score(), 3);

    session.apply_stat(StatKind::Assist, Increment);
    session.apply_stat(StatKind::Assist, Increment);
    assert_eq!(session.total_score(), 3);
    assert_eq!(session.current_count(StatKind::Assist), 2);

    session.select_player(Some(&b));
    session.apply_stat(StatKind::TwoPoints, Increment);
    assert_eq!(session.total_score(), 5);

    session.clear();
    assert_eq!(session.total_score(), 0);
    assert!(session.active_player().is_none());
    assert!(session.records().values().all(PlayerStatRecord::is_zero));
    assert_eq!(session.records().len(), 2);
}

#[test]
fn test_score_matches_recomputation_for_long_random_sequence() {
    let mut session = StatSession::new(
        TeamId::new("T"),
        vec![player("A", "4"), player("B", "7"), player("C", "11")],
    );
    let ids = [PlayerId::new("A"), PlayerId::new("B"), PlayerId::new("C")];
    let mut rng = Lcg(42);

    for step in 0..5_000 {
        if step % 7 == 0 {
            let idx = (rng.next() as usize) % ids.len();
            session.select_player(Some(&ids[idx]));
        }
        let kind = rng.pick(&StatKind::ALL);
        // Bias toward decrements so the floor is hit often.
        let direction = rng.pick(&[Increment, Decrement, Decrement]);
        session.apply_stat(kind, direction);

        assert_eq!(session.total_score(), session.recomputed_score());
    }
}

#[test]
fn test_interleaved_weighted_decrements_cannot_diverge() {
    let mut session = two_player_session();
    session.select_player(Some(&PlayerId::new("A")));

    session.apply_stat(StatKind::FreeThrow, Increment);
    session.apply_stat(StatKind::ThreePoints, Decrement);
    session.apply_stat(StatKind::TwoPoints, Decrement);
    session.apply_stat(StatKind::FreeThrow, Decrement);
    session.apply_stat(StatKind::FreeThrow, Decrement);
    session.apply_stat(StatKind::ThreePoints, Increment);
    session.apply_stat(StatKind::FreeThrow, Decrement);

    assert_eq!(session.total_score(), 3);
    assert_eq!(session.total_score(), session.recomputed_score());
}

#[test]
fn test_restore_merges_snapshot_onto_roster() {
    let mut saved = StatSession::new(TeamId::new("T"), vec![player("A", "4")]);
    saved.select_player(Some(&PlayerId::new("A")));
    saved.apply_stat(StatKind::ThreePoints, Increment);
    saved.apply_stat(StatKind::ThreePoints, Increment);
    let snapshot = saved.snapshot();

    let session = StatSession::restore(
        TeamId::new("T"),
        vec![player("A", "4"), player("B", "7")],
        Some(&snapshot),
    );

    assert_eq!(
        session
            .record(&PlayerId::new("A"))
            .unwrap()
            .get(StatKind::ThreePoints),
        2
    );
    assert!(session.record(&PlayerId::new("B")).unwrap().is_zero());
    assert_eq!(session.total_score(), 6);
    assert!(session.active_player().is_none());
}

#[test]
fn test_restore_ignores_other_team_snapshot() {
    let mut saved = StatSession::new(TeamId::new("U"), vec![player("A", "4")]);
    saved.select_player(Some(&PlayerId::new("A")));
    saved.apply_stat(StatKind::TwoPoints, Increment);
    let snapshot = saved.snapshot();

    let session = StatSession::restore(
        TeamId::new("T"),
        vec![player("A", "4"), player("B", "7")],
        Some(&snapshot),
    );

    assert_eq!(session.total_score(), 0);
    assert!(session.records().values().all(PlayerStatRecord::is_zero));
}

#[test]
fn test_restore_drops_players_no_longer_on_roster() {
    let mut saved = StatSession::new(
        TeamId::new("T"),
        vec![player("A", "4"), player("Z", "9")],
    );
    saved.select_player(Some(&PlayerId::new("Z")));
    saved.apply_stat(StatKind::TwoPoints, Increment);
    saved.select_player(Some(&PlayerId::new("A")));
    saved.apply_stat(StatKind::FreeThrow, Increment);
    let snapshot = saved.snapshot();
    assert_eq!(snapshot.total_score, 3);

    let session = StatSession::restore(
        TeamId::new("T"),
        vec![player("A", "4")],
        Some(&snapshot),
    );

    assert!(session.record(&PlayerId::new("Z")).is_none());
    assert_eq!(session.records().len(), 1);
    assert_eq!(session.total_score(), 1);
    assert_eq!(session.total_score(), session.recomputed_score());
}

#[test]
fn test_restore_without_snapshot_is_fresh() {
    let session = StatSession::restore(TeamId::new("T"), vec![player("A", "4")], None);

    assert_eq!(session.total_score(), 0);
    assert_eq!(session.records().len(), 1);
}

#[test]
fn test_restore_with_huge_counters_saturates_score() {
    let mut record = PlayerStatRecord::default();
    record.counts[StatKind::ThreePoints.index()] = 2_000_000_000;
    record.counts[StatKind::TwoPoints.index()] = 2_000_000_000;
    let snapshot = SessionSnapshot {
        team_id: TeamId::new("T"),
        records: BTreeMap::from([
            (PlayerId::new("A"), record),
            (PlayerId::new("B"), record),
        ]),
        total_score: 0,
    };

    let session = StatSession::restore(
        TeamId::new("T"),
        vec![player("A", "4"), player("B", "7")],
        Some(&snapshot),
    );

    assert_eq!(record.points(), u32::MAX);
    assert_eq!(session.total_score(), u32::MAX);
    assert_eq!(session.total_score(), session.recomputed_score());
    assert_eq!(session.player_points(&PlayerId::new("A")), u32::MAX);
}

#[test]
fn test_duplicate_roster_ids_keep_first_entry() {
    let mut session = StatSession::new(
        TeamId::new("T"),
        vec![player("A", "4"), player("B", "7"), player("A", "40")],
    );

    assert_eq!(session.roster().len(), 2);
    assert_eq!(session.records().len(), 2);
    assert_eq!(session.roster()[0].number, "4");
    assert!(session.player_by_number("40").is_none());

    session.select_player(Some(&PlayerId::new("A")));
    session.apply_stat(StatKind::ThreePoints, Increment);
    assert_eq!(session.total_score(), 3);
    assert_eq!(session.total_score(), session.recomputed_score());
}
