use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};
use season_scan::constants::face_mesh;
use season_scan::{
    DrapeRenderer, FaceLandmarks, NormalizedPoint, SeasonAnalyzer, SeasonClassifier, SkinSampler,
    StaticLandmarks, WhiteBalanceNormalizer,
};

fn face_landmarks() -> FaceLandmarks {
    let mut points = vec![NormalizedPoint::new(0.5, 0.5); face_mesh::MIN_LANDMARKS];
    let n = face_mesh::FACE_OVAL.len();
    for (i, &idx) in face_mesh::FACE_OVAL.iter().enumerate() {
        let theta = i as f32 / n as f32 * std::f32::consts::TAU;
        points[idx] = NormalizedPoint::new(0.5 + 0.3 * theta.sin(), 0.5 - 0.4 * theta.cos());
    }
    FaceLandmarks::new(points)
}

fn portrait() -> RgbImage {
    RgbImage::from_fn(640, 480, |x, y| Rgb([(150 + x % 60) as u8, (120 + y % 50) as u8, 100]))
}

fn benchmark_season_analysis(c: &mut Criterion) {
    let image = portrait();
    let landmarks = face_landmarks();

    c.bench_function("white_balance_640x480", |b| {
        let normalizer = WhiteBalanceNormalizer::new();
        b.iter(|| normalizer.normalize(black_box(&image)))
    });

    c.bench_function("skin_sample_640x480", |b| {
        let sampler = SkinSampler::new();
        b.iter(|| sampler.sample(black_box(&image), Some(&landmarks)))
    });

    c.bench_function("classify", |b| {
        let classifier = SeasonClassifier::new();
        b.iter(|| classifier.classify(black_box([210, 180, 140])))
    });

    c.bench_function("drape_640x480", |b| {
        let renderer = DrapeRenderer::new();
        b.iter(|| renderer.render(black_box(&image), Some("#800020")))
    });

    c.bench_function("full_pipeline_640x480", |b| {
        let analyzer = SeasonAnalyzer::new(StaticLandmarks::new(landmarks.clone()));
        b.iter(|| analyzer.analyze(black_box(&image)))
    });
}

criterion_group!(benches, benchmark_season_analysis);
criterion_main!(benches);
