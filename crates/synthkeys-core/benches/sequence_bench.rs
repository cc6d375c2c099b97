//! Criterion benchmarks for keysym resolution and key sequencing.
//!
//! Run with:
//! ```bash
//! cargo bench --package synthkeys-core --bench sequence_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use synthkeys_core::keysym::table::{L_ALT, L_CTRL, L_SHIFT, TAB};
use synthkeys_core::{resolve, send_keys, sequence, InputItem, KeyEvent};

/// Codepoints from each resolver sub-range.
const BENCH_CODEPOINTS: &[i64] = &[
    0x0D,     // control
    0x41,     // ASCII
    0xE9,     // Latin-1
    0x20AC,   // BMP
    0x1F600,  // astral
    0x11_0000, // invalid
];

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("keysym_resolve");

    group.bench_function("resolve_single", |b| b.iter(|| resolve(black_box(0x41))));

    group.bench_function("resolve_mixed_batch", |b| {
        b.iter(|| {
            BENCH_CODEPOINTS
                .iter()
                .map(|&cp| resolve(black_box(cp)))
                .filter(Result::is_ok)
                .count()
        })
    });

    group.finish();
}

fn bench_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_sequence");

    for len in [16usize, 256, 4096] {
        let text: String = "The quick brown fox ✓ 😀 ".chars().cycle().take(len).collect();
        let items = vec![InputItem::Text(text)];
        group.bench_with_input(BenchmarkId::new("type_text", len), &items, |b, items| {
            b.iter(|| sequence(black_box(items)))
        });
    }

    let chord: Vec<InputItem> = vec![
        L_CTRL.into(),
        InputItem::Sequence(vec![L_SHIFT.into(), L_ALT.into(), "T".into()]),
        TAB.into(),
        "f".into(),
    ];
    group.bench_function("nested_chord", |b| {
        let mut events: Vec<KeyEvent> = Vec::with_capacity(32);
        b.iter(|| {
            events.clear();
            send_keys(&mut events, black_box(&chord))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_sequence);
criterion_main!(benches);
