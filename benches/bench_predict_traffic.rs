// benches/bench_predict_traffic.rs

use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion,
    PlotConfiguration,
};

use traffic_congestion::prediction_engine::{explain, predict};
use traffic_congestion::shared_data::{PredictionInput, RoadType};

/// Builds a spread of valid inputs covering every hour, road type and weekend flag.
fn generate_inputs(count: usize) -> Vec<PredictionInput> {
    (0..count)
        .filter_map(|i| {
            let hour = (i % 24) as u8;
            let road_type = RoadType::ALL[i % RoadType::ALL.len()];
            // Temperature sweeps -10..40, rainfall sweeps 0..50.
            let temperature = -10.0 + (i % 51) as f64;
            let rainfall = (i % 11) as f64 * 5.0;
            PredictionInput::new(temperature, rainfall, hour, i % 7 >= 5, road_type).ok()
        })
        .collect()
}

fn bench_predict(c: &mut Criterion) {
    let batch_sizes = [1, 100, 1000];

    let mut group = c.benchmark_group("Prediction_Engine_Benchmarks");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &batch in batch_sizes.iter() {
        let inputs = generate_inputs(batch);

        group.bench_with_input(BenchmarkId::new("predict", batch), &inputs, |b, inputs| {
            b.iter(|| {
                for input in inputs {
                    black_box(predict(black_box(input)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("explain", batch), &inputs, |b, inputs| {
            b.iter(|| {
                for input in inputs {
                    black_box(explain(black_box(input)));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_predict);
criterion_main!(benches);
