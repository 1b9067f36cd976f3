use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hegemon::board::{Player, PlayerId, TerritoryId};
use hegemon::dice::ScriptedDice;
use hegemon::game::{Game, STARTING_UNITS};
use hegemon::scenario::classic_board;

fn roster_of(n: u32) -> Vec<Player> {
    (1..=n).map(|i| Player::new(PlayerId(i))).collect()
}

fn classic_game() -> Game<ScriptedDice> {
    Game::new(classic_board(), roster_of(3), ScriptedDice::new(&[1])).unwrap()
}

fn bench_setup(c: &mut Criterion) {
    c.bench_function("setup_classic_3_players", |b| {
        b.iter(|| {
            Game::new(
                black_box(classic_board()),
                black_box(roster_of(3)),
                ScriptedDice::new(&[1]),
            )
            .unwrap()
        })
    });
}

fn bench_single_placement(c: &mut Criterion) {
    c.bench_function("place_one_unit", |b| {
        b.iter_batched(
            classic_game,
            |mut game| {
                game.place_unit(black_box(PlayerId(1)), black_box(TerritoryId(1)))
                    .unwrap();
                game
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_full_placement_phase(c: &mut Criterion) {
    c.bench_function("full_placement_phase_105_units", |b| {
        b.iter_batched(
            classic_game,
            |mut game| {
                for round in 0..STARTING_UNITS {
                    for player in [1u32, 2, 3] {
                        let territory = (player - 1) * 14 + (round % 14) + 1;
                        game.place_unit(PlayerId(player), TerritoryId(territory))
                            .unwrap();
                    }
                }
                game
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_state_clone(c: &mut Criterion) {
    let game = classic_game();
    c.bench_function("state_snapshot_clone", |b| {
        b.iter(|| black_box(game.state()).clone())
    });
}

criterion_group!(
    benches,
    bench_setup,
    bench_single_placement,
    bench_full_placement_phase,
    bench_state_clone,
);
criterion_main!(benches);
