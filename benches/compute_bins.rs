#[macro_use]
extern crate bencher;
extern crate histobin;

use bencher::Bencher;
use histobin::{compute_bins, BinOptions, ThresholdMethod};

fn randomish(bottom: f64, top:f64, count: usize) -> Vec<f64> {
    let mut data : Vec<f64> = Vec::new();
    let range = top - bottom;
    let phi: f64 = (1.0 + 5.0_f64.sqrt()) / 2.0;
    for i in 0..count {
        // Pseudo random Weyl sequence based on Golden ratio.
        let pseudo_rand = ((i as f64) * phi) % 1.0_f64;
        // Squaring skews the distribution so the spread-based rules disagree.
        let sample = bottom + pseudo_rand * pseudo_rand * range;
        data.push(sample);
    }
    data
}

fn bin_with(b: &mut Bencher, method: ThresholdMethod, count: usize) {
    let data = randomish(-10000.0, 10000.0, count);
    let options = BinOptions::from(method).with_pad_bounds(true);
    b.iter(|| { compute_bins(&data, &options).unwrap() });
}

fn bench_square_root_010000(b: &mut Bencher) { bin_with(b, ThresholdMethod::SquareRoot, 10000); }
fn bench_square_root_100000(b: &mut Bencher) { bin_with(b, ThresholdMethod::SquareRoot, 100000); }
fn bench_scott_010000(b: &mut Bencher) { bin_with(b, ThresholdMethod::Scott, 10000); }
fn bench_scott_100000(b: &mut Bencher) { bin_with(b, ThresholdMethod::Scott, 100000); }
fn bench_freedman_diaconis_010000(b: &mut Bencher) { bin_with(b, ThresholdMethod::FreedmanDiaconis, 10000); }
fn bench_freedman_diaconis_100000(b: &mut Bencher) { bin_with(b, ThresholdMethod::FreedmanDiaconis, 100000); }
fn bench_sturges_010000(b: &mut Bencher) { bin_with(b, ThresholdMethod::Sturges, 10000); }
fn bench_sturges_100000(b: &mut Bencher) { bin_with(b, ThresholdMethod::Sturges, 100000); }

fn bench_rows_050000(b: &mut Bencher) {
    let rows: Vec<Vec<f64>> = randomish(0.0, 500.0, 50000)
        .into_iter()
        .enumerate()
        .map(|(i, x)| vec![i as f64, x])
        .collect();
    let options = BinOptions::new().with_dimensions(1_usize);
    b.iter(|| { compute_bins(&rows, &options).unwrap() });
}

benchmark_group!(benches,
    bench_square_root_010000,       bench_square_root_100000,
    bench_scott_010000,             bench_scott_100000,
    bench_freedman_diaconis_010000, bench_freedman_diaconis_100000,
    bench_sturges_010000,           bench_sturges_100000,
    bench_rows_050000
);
benchmark_main!(benches);
