use std::path::PathBuf;

use abyss_core::{Game, Intent, IntentStop, Pos, TileKind};
use anyhow::{Result, ensure};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tools::{init_tracing, load_rules};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    intents: u32,
    /// Optional TOML file overriding the standard rules
    #[arg(short, long)]
    rules: Option<PathBuf>,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn random_target(rng: &mut ChaCha8Rng, game: &Game) -> Pos {
    let map = &game.state().map;
    let enemies: Vec<Pos> = game.state().enemies.values().map(|enemy| enemy.pos).collect();
    if !enemies.is_empty() && rng.next_u64() % 3 == 0 {
        return choose(rng, &enemies);
    }
    let x = (rng.next_u64() % map.internal_width as u64) as i32;
    let y = (rng.next_u64() % map.internal_height as u64) as i32;
    Pos { y, x }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let rules = load_rules(args.rules.as_deref())?;

    println!("Starting Fuzz harness on seed {} for {} intents...", args.seed, args.intents);
    let mut game = Game::with_rules(args.seed, rules)?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut deaths = 0_u32;
    let mut deepest = game.state().floor;
    for _ in 0..args.intents {
        let intent = match choose(&mut rng, &[0_u8, 1, 2, 2, 2, 2]) {
            0 => Intent::Wait,
            1 => Intent::UsePotion,
            _ => Intent::MoveTo(random_target(&mut rng, &game)),
        };
        if game.apply_intent(intent).stop == IntentStop::RunReset {
            deaths += 1;
        }
        deepest = deepest.max(game.state().floor);

        // Assert invariants
        let state = game.state();
        let player = &state.player;
        ensure!(player.hp <= player.max_hp, "Invariant failed: HP > Max HP");
        ensure!(state.map.tile_at(player.pos).walkable(), "Invariant failed: player inside wall");
        for enemy in state.enemies.values() {
            ensure!(state.map.tile_at(enemy.pos).walkable(), "Invariant failed: enemy inside wall");
        }
        ensure!(state.log.len() <= 5, "Invariant failed: log overflow");
        ensure!(state.map.count_tiles(TileKind::Stair) == 1, "Invariant failed: stair count");
    }

    println!(
        "Fuzzing completed successfully: turn {}, deepest floor {}, {} deaths, hash {}",
        game.current_turn(),
        deepest,
        deaths,
        game.snapshot_hash()
    );
    Ok(())
}
