// Rust guideline compliant 2026-02-06

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use warta_core::{
    apply_side_effects, resolve_effective_target, standard_table, validate, ActorRole,
    ArticleStatus, ReviewStamps, StatusChange, TransitionGraph, TransitionTable,
};

fn bench_validate_all_pairs(c: &mut Criterion) {
    let table = standard_table();
    c.bench_function("validate_all_pairs", |b| {
        b.iter(|| {
            let mut admitted = 0usize;
            for from in ArticleStatus::ALL {
                for to in ArticleStatus::ALL {
                    for role in ActorRole::ALL {
                        if validate(table, from, to, role).is_admitted() {
                            admitted += 1;
                        }
                    }
                }
            }
            black_box(admitted)
        })
    });
}

fn bench_full_transition_sequence(c: &mut Criterion) {
    let table = standard_table();
    let stamps = ReviewStamps::default();
    let now = Utc::now();
    c.bench_function("escalate_validate_stamp", |b| {
        b.iter(|| {
            let target = resolve_effective_target(black_box(ArticleStatus::Published), ActorRole::Admin);
            let decision = validate(table, ArticleStatus::PendingReview, target, ActorRole::Admin);
            let change = StatusChange::new(ArticleStatus::PendingReview, target, "Editor", now);
            black_box((decision, apply_side_effects(&stamps, &change)))
        })
    });
}

fn bench_reachability(c: &mut Criterion) {
    let graph = TransitionGraph::from_table(&TransitionTable::standard());
    c.bench_function("reachable_from_draft", |b| {
        b.iter(|| black_box(graph.reachable_from(ArticleStatus::Draft)))
    });
}

criterion_group!(
    benches,
    bench_validate_all_pairs,
    bench_full_transition_sequence,
    bench_reachability
);
criterion_main!(benches);
