use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use traffic_congestion::{predict, CongestionLevel, PredictionInput, RoadType};

const SAMPLES: usize = 5_000;

fn random_input(rng: &mut StdRng) -> PredictionInput {
    let road_type = RoadType::ALL[rng.random_range(0..RoadType::ALL.len())];
    PredictionInput::new(
        rng.random_range(-10.0..=40.0),
        rng.random_range(0.0..=50.0),
        rng.random_range(0..=23),
        rng.random_bool(0.5),
        road_type,
    )
    .expect("generated input within domain")
}

fn expected_level(score: f64) -> CongestionLevel {
    match score {
        s if s < 30.0 => CongestionLevel::Low,
        s if s < 60.0 => CongestionLevel::Medium,
        s if s < 85.0 => CongestionLevel::High,
        _ => CongestionLevel::Severe,
    }
}

#[test]
fn scores_stay_within_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let output = predict(&random_input(&mut rng));
        let score = output.predicted_traffic();
        assert!((0.0..=100.0).contains(&score), "score {score} out of bounds");
    }
}

#[test]
fn level_always_matches_score() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..SAMPLES {
        let output = predict(&random_input(&mut rng));
        assert_eq!(output.congestion_level(), expected_level(output.predicted_traffic()));
    }
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..SAMPLES {
        let input = random_input(&mut rng);
        assert_eq!(predict(&input), predict(&input));
    }
}

#[test]
fn more_rain_never_lowers_the_score() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..SAMPLES {
        let input = random_input(&mut rng);
        let wetter_rain = rng.random_range(input.rainfall()..=50.0);
        let wetter = PredictionInput::new(
            input.temperature(),
            wetter_rain,
            input.hour(),
            input.is_weekend(),
            input.road_type(),
        )
        .expect("rainfall within domain");
        assert!(predict(&wetter).predicted_traffic() >= predict(&input).predicted_traffic());
    }
}

#[test]
fn predictions_are_independent_across_threads() {
    let mut rng = StdRng::seed_from_u64(19);
    let inputs: Vec<PredictionInput> = (0..256).map(|_| random_input(&mut rng)).collect();
    let sequential: Vec<_> = inputs.iter().map(predict).collect();

    let handles: Vec<_> = inputs
        .chunks(32)
        .map(|chunk| {
            let chunk = chunk.to_vec();
            std::thread::spawn(move || chunk.iter().map(predict).collect::<Vec<_>>())
        })
        .collect();
    let parallel: Vec<_> = handles
        .into_iter()
        .flat_map(|handle| handle.join().expect("prediction thread panicked"))
        .collect();

    assert_eq!(sequential, parallel);
}
