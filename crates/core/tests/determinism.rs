use abyss_core::{Game, InputJournal, Intent, Pos, Rules, replay_to_end};

fn scripted_journal(seed: u64) -> InputJournal {
    let mut journal = InputJournal::new(seed);
    for step in 0..12 {
        let intent = match step % 4 {
            0 => Intent::MoveTo(Pos { y: 22, x: 22 }),
            1 => Intent::Wait,
            2 => Intent::MoveTo(Pos { y: 10 + step, x: 30 - step }),
            _ => Intent::UsePotion,
        };
        journal.append(intent);
    }
    journal
}

#[test]
fn test_determinism_identical_seeds_produce_same_hash() {
    let rules = Rules::default();
    let result1 = replay_to_end(&rules, &scripted_journal(12345)).expect("Replay 1 failed");
    let result2 = replay_to_end(&rules, &scripted_journal(12345)).expect("Replay 2 failed");

    assert_eq!(
        result1.final_snapshot_hash, result2.final_snapshot_hash,
        "Identical runs must produce identical hashes"
    );
    assert_eq!(result1.final_turn, result2.final_turn);
    assert_eq!(result1.final_floor, result2.final_floor);
}

#[test]
fn test_determinism_different_seeds_produce_different_hashes() {
    let rules = Rules::default();
    let result1 = replay_to_end(&rules, &scripted_journal(123)).expect("Replay 1 failed");
    let result2 = replay_to_end(&rules, &scripted_journal(456)).expect("Replay 2 failed");

    assert_ne!(
        result1.final_snapshot_hash, result2.final_snapshot_hash,
        "Different seeds should produce different floors and hashes"
    );
}

#[test]
fn test_deterministic_smoke_fixed_seed_stable_log_sequence() {
    fn run_trace(seed: u64) -> Vec<String> {
        let mut game = Game::new(seed);
        let mut trace = Vec::new();
        for record in scripted_journal(seed).inputs {
            let result = game.apply_intent(record.intent);
            trace.push(format!("{:?}/{}", result.stop, result.ticks));
            trace.extend(game.snapshot().log);
        }
        trace
    }

    assert_eq!(run_trace(2_718), run_trace(2_718));
}

#[test]
fn test_floor_layout_depends_only_on_seed() {
    let left = Game::new(99).snapshot();
    let right = Game::new(99).snapshot();
    assert_eq!(left.cells, right.cells);
    assert_eq!(left.enemies, right.enemies);
    assert_eq!(left.player, right.player);
}
