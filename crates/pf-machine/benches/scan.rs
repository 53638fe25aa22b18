//! Payline scan micro-benchmark

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use pf_machine::{Paytable, ReelWindow, scan_payline};

fn bench_scan(c: &mut Criterion) {
    let window = ReelWindow::from_rows([
        [10, 1, 10, 1, 2],
        [3, 10, 1, 1, 10],
        [11, 4, 4, 10, 1],
    ]);
    let paylines: Vec<[u8; 5]> = vec![
        [0, 0, 0, 0, 0],
        [1, 1, 1, 1, 1],
        [2, 2, 2, 2, 2],
        [0, 1, 2, 1, 0],
        [2, 1, 0, 1, 2],
    ];
    let table: Paytable = (1..=11).map(|s| (s, [0, 0, 5, 25, 100])).collect();

    c.bench_function("scan_5_paylines", |b| {
        b.iter(|| {
            let mut total = 0i64;
            for payline in &paylines {
                let candidates = scan_payline(black_box(&window), payline, 10);
                if let Some(strike) = table.select(&candidates) {
                    total += table.pay(&strike);
                }
            }
            black_box(total)
        })
    });
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
