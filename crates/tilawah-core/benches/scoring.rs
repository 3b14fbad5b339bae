use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tilawah_core::catalogue;
use tilawah_core::{
    score_evaluation, score_verse, EvaluationRecord, RecommendedTrack, Severity, VerseErrorSet,
    VerseKey,
};

fn make_record(errors_per_verse: usize) -> EvaluationRecord {
    let mut record = EvaluationRecord::new(
        "BENCH001",
        "Examiner",
        "Activity",
        "Group",
        RecommendedTrack::Foundation,
    );
    for key in VerseKey::ALL {
        let obvious = catalogue::options(key, Severity::Obvious)
            .iter()
            .take(errors_per_verse);
        let subtle = catalogue::options(key, Severity::Subtle)
            .iter()
            .take(errors_per_verse);
        record.verses.set(
            key,
            Some(VerseErrorSet::from_phrases(
                obvious.map(|s| s.to_string()),
                subtle.map(|s| s.to_string()),
            )),
        );
    }
    record
}

fn bench_score_verse(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_verse");
    let set = VerseErrorSet::from_phrases(["a", "b"], ["c"]);

    group.bench_function("null", |b| b.iter(|| score_verse(black_box(None))));
    group.bench_function("three_errors", |b| {
        b.iter(|| score_verse(black_box(Some(&set))))
    });

    group.finish();
}

fn bench_score_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_evaluation");

    group.bench_function("clean", |b| {
        let record = make_record(0);
        b.iter(|| score_evaluation(black_box(&record)))
    });

    group.bench_function("saturated", |b| {
        let record = make_record(10);
        b.iter(|| score_evaluation(black_box(&record)))
    });

    group.finish();
}

criterion_group!(benches, bench_score_verse, bench_score_evaluation);
criterion_main!(benches);
