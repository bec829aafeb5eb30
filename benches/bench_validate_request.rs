// benches/bench_validate_request.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use traffic_congestion::prediction_engine::validate_request;
use traffic_congestion::shared_data::TrafficPredictionRequest;

fn bench_validate_request(c: &mut Criterion) {
    let valid = TrafficPredictionRequest {
        temperature: -5.0,
        rainfall: 10.0,
        hour: 2.0,
        is_weekend: false,
        road_type: "highway".to_string(),
    };
    let invalid_enum = TrafficPredictionRequest {
        road_type: "gravel".to_string(),
        ..valid.clone()
    };
    let raw_json = r#"{"temperature":20,"rainfall":0,"hour":8,"isWeekend":true,"roadType":"rural"}"#;

    c.bench_function("validate_request (valid)", |b| {
        b.iter(|| black_box(validate_request(black_box(&valid))))
    });

    c.bench_function("validate_request (invalid road type)", |b| {
        b.iter(|| black_box(validate_request(black_box(&invalid_enum))))
    });

    // Decoding plus validation, as the HTTP handler does it.
    c.bench_function("decode_and_validate", |b| {
        b.iter(|| {
            let request: Result<TrafficPredictionRequest, _> =
                serde_json::from_str(black_box(raw_json));
            if let Ok(request) = request {
                black_box(validate_request(&request)).ok();
            }
        })
    });
}

criterion_group!(benches, bench_validate_request);
criterion_main!(benches);
