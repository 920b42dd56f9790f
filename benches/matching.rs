use criterion::{black_box, criterion_group, criterion_main, Criterion};

use set_engine::cards::full_deck;
use set_engine::core::GameConfig;
use set_engine::rules::{count_sets, find_set, is_valid_set, GameEngine};

fn bench_matching(c: &mut Criterion) {
    let deck = full_deck();

    c.bench_function("is_valid_set", |b| {
        b.iter(|| is_valid_set(black_box(&deck[3]), black_box(&deck[40]), black_box(&deck[77])))
    });

    c.bench_function("find_set_12", |b| b.iter(|| find_set(black_box(&deck[..12]))));

    c.bench_function("count_sets_81", |b| b.iter(|| count_sets(black_box(&deck))));
}

fn bench_engine(c: &mut Criterion) {
    let engine = GameEngine::new(GameConfig::new().with_seed(1)).unwrap();

    c.bench_function("start_game", |b| b.iter(|| engine.start_game()));

    c.bench_function("play_hints_to_completion", |b| {
        b.iter(|| {
            let mut state = engine.start_game();
            while !engine.is_finished(&state) {
                match engine.hint(&state) {
                    Some(set) => {
                        for id in set {
                            engine.select_card(&mut state, id);
                        }
                    }
                    None => {
                        engine.deal_more(&mut state);
                    }
                }
            }
            state
        })
    });
}

criterion_group!(benches, bench_matching, bench_engine);
criterion_main!(benches);
