//! Integration tests for the complete season analysis pipeline
//!
//! These tests validate the end-to-end workflow on synthetic portraits:
//! - Image decoding and white balance
//! - Landmark-driven skin sampling
//! - Season classification and palette lookup
//! - Drape preview rendering and presentation
//! - Error handling for missing faces and bad uploads

use std::sync::Arc;

use image::{Rgb, RgbImage};
use season_scan::color::ColorConverter;
use season_scan::constants::face_mesh;
use season_scan::image_loader::{decode_image, encode_image, ImageFormat};
use season_scan::{
    lookup, AnalysisConfig, AnalysisError, DrapeSelection, FaceLandmarks, LandmarkProvider,
    NormalizedPoint, Presenter, Season, SeasonAnalyzer, SkinTone, StaticLandmarks,
};

const BACKGROUND: [u8; 3] = [128, 128, 128];
const SKIN: [u8; 3] = [210, 180, 140];

// ============================================================================
// Fixtures
// ============================================================================

/// Face-mesh landmarks whose oval is an ellipse around the image center
fn face_landmarks(rx: f32, ry: f32) -> FaceLandmarks {
    let mut points = vec![NormalizedPoint::new(0.5, 0.5); face_mesh::MIN_LANDMARKS];
    let n = face_mesh::FACE_OVAL.len();
    for (i, &idx) in face_mesh::FACE_OVAL.iter().enumerate() {
        let theta = i as f32 / n as f32 * std::f32::consts::TAU;
        points[idx] = NormalizedPoint::new(0.5 + rx * theta.sin(), 0.5 - ry * theta.cos());
    }
    FaceLandmarks::new(points)
}

/// Portrait with a skin-colored block covering the middle 60% of the frame
fn portrait(width: u32, height: u32, skin: [u8; 3], background: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let fx = x as f32 / width as f32;
        let fy = y as f32 / height as f32;
        if (0.2..0.8).contains(&fx) && (0.2..0.8).contains(&fy) {
            Rgb(skin)
        } else {
            Rgb(background)
        }
    })
}

fn analyzer_without_white_balance() -> SeasonAnalyzer<StaticLandmarks> {
    let mut config = AnalysisConfig::default();
    config.white_balance.enabled = false;
    SeasonAnalyzer::with_config(StaticLandmarks::new(face_landmarks(0.25, 0.25)), &config)
        .expect("default drape settings are valid")
}

#[derive(Default)]
struct RecordingPresenter {
    calls: Vec<(Season, Vec<String>, Vec<String>, [u8; 3], [u8; 3])>,
}

impl Presenter for RecordingPresenter {
    fn present(
        &mut self,
        season: Season,
        best: &[&str],
        avoid: &[&str],
        preview: &RgbImage,
        skin: SkinTone,
    ) -> season_scan::Result<()> {
        self.calls.push((
            season,
            best.iter().map(|c| c.to_string()).collect(),
            avoid.iter().map(|c| c.to_string()).collect(),
            preview.get_pixel(0, 0).0,
            skin.rgb,
        ));
        Ok(())
    }
}

// ============================================================================
// End-to-end
// ============================================================================

#[test]
fn test_warm_beige_portrait_is_light_spring() {
    let analyzer = analyzer_without_white_balance();
    let image = portrait(120, 160, SKIN, BACKGROUND);

    let analysis = analyzer.analyze(&image).unwrap();
    assert_eq!(analysis.skin_tone().rgb, SKIN);
    assert_eq!(analysis.skin_tone().hex(), "#d2b48c");
    assert_eq!(analysis.season, Season::LightSpring);
    assert_eq!(analysis.palette, lookup(Season::LightSpring));
}

#[test]
fn test_analyze_png_bytes_and_preview_keeps_format() {
    let analyzer = analyzer_without_white_balance();
    let bytes = encode_image(&portrait(100, 100, SKIN, BACKGROUND), ImageFormat::Png).unwrap();

    let analysis = analyzer.analyze_bytes(&bytes).unwrap();
    assert_eq!(analysis.format, Some(ImageFormat::Png));
    assert_eq!(analysis.season, Season::LightSpring);

    let mut selection = DrapeSelection::new();
    selection.select(analysis.best()[2]).unwrap();
    let encoded = analysis.encoded_preview(&selection).unwrap();
    let (preview, format) = decode_image(&encoded).unwrap();
    assert_eq!(format, ImageFormat::Png);
    assert_eq!(preview.dimensions(), (100, 100));

    // border pixel decodes back to the selected swatch
    let converter = ColorConverter::new();
    assert_eq!(converter.rgb_to_hex(preview.get_pixel(0, 50).0), "#AFEEEE");
    assert_eq!(preview.get_pixel(50, 50).0, SKIN);
}

#[test]
fn test_white_balance_pulls_tinted_skin_toward_neutral() {
    let converter = ColorConverter::new();
    // everything tinted yellow by warm lighting
    let image = portrait(100, 100, [220, 180, 110], [170, 160, 100]);
    let raw_b = converter.rgb_to_encoded([220, 180, 110]).b;

    let analyzer = SeasonAnalyzer::new(StaticLandmarks::new(face_landmarks(0.25, 0.25)));
    let analysis = analyzer.analyze(&image).unwrap();
    let corrected_b = converter.rgb_to_encoded(analysis.skin_tone().rgb).b;

    assert!(corrected_b < raw_b, "b {corrected_b} should fall below {raw_b}");
    assert!(Season::ALL.contains(&analysis.season));
    assert_eq!(analysis.palette, lookup(analysis.season));
}

#[test]
fn test_presenter_receives_complete_result() {
    let analyzer = analyzer_without_white_balance();
    let analysis = analyzer.analyze(&portrait(100, 100, SKIN, BACKGROUND)).unwrap();

    let mut presenter = RecordingPresenter::default();
    analysis.present(&mut presenter, &DrapeSelection::new()).unwrap();

    assert_eq!(presenter.calls.len(), 1);
    let (season, best, avoid, border, skin) = &presenter.calls[0];
    assert_eq!(*season, Season::LightSpring);
    assert_eq!(best, &lookup(Season::LightSpring).best.map(String::from).to_vec());
    assert_eq!(avoid.len(), 4);
    assert_eq!(*border, [255, 255, 255]);
    assert_eq!(*skin, SKIN);
}

#[test]
fn test_report_roundtrips_through_json() {
    let analyzer = analyzer_without_white_balance();
    let report = analyzer
        .analyze(&portrait(80, 80, SKIN, BACKGROUND))
        .unwrap()
        .report();
    let json = report.to_json().unwrap();
    let back: season_scan::SeasonReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_no_face_returns_no_partial_result() {
    let analyzer = SeasonAnalyzer::new(StaticLandmarks::none());
    let bytes = encode_image(&portrait(64, 64, SKIN, BACKGROUND), ImageFormat::Png).unwrap();

    let err = analyzer.analyze_bytes(&bytes).unwrap_err();
    assert!(matches!(err, AnalysisError::NoFaceDetected));
    assert_eq!(err.user_message(), "Face not found. Please use a clearer photo.");
}

#[test]
fn test_garbage_upload_is_decode_failure() {
    let analyzer = analyzer_without_white_balance();
    let err = analyzer.analyze_bytes(b"\x00\x01 not a photo").unwrap_err();
    assert!(matches!(err, AnalysisError::DecodeFailure { .. }));
}

#[test]
fn test_truncated_landmarks_are_rejected() {
    let short = FaceLandmarks::new(vec![NormalizedPoint::new(0.5, 0.5); 68]);
    let analyzer = SeasonAnalyzer::new(StaticLandmarks::new(short));
    let err = analyzer.analyze(&portrait(50, 50, SKIN, BACKGROUND)).unwrap_err();
    assert!(matches!(err, AnalysisError::InsufficientLandmarks { found: 68, .. }));
}

#[test]
fn test_invalid_drape_falls_back_to_white() {
    let analyzer = analyzer_without_white_balance();
    let analysis = analyzer.analyze(&portrait(100, 100, SKIN, BACKGROUND)).unwrap();
    let preview = analysis.preview(Some("#XYZXYZ"));
    assert_eq!(preview.get_pixel(99, 99).0, [255, 255, 255]);
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_shared_analyzer_across_threads() {
    let provider: Arc<dyn LandmarkProvider> =
        Arc::new(StaticLandmarks::new(face_landmarks(0.25, 0.25)));
    let analyzer = SeasonAnalyzer::new(provider);

    let inputs = [
        ([90, 60, 40], Season::DeepAutumn),
        ([60, 60, 80], Season::DeepWinter),
        (SKIN, Season::LightSpring),
    ];

    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|&(skin, _)| {
                let analyzer = &analyzer;
                scope.spawn(move || {
                    // background matches skin, so white balance sees a uniform image
                    let image = portrait(60, 60, skin, skin);
                    let raw = analyzer_without_white_balance().analyze(&image).unwrap().season;
                    (raw, analyzer.analyze(&image).is_ok())
                })
            })
            .collect();

        for (handle, &(_, expected)) in handles.into_iter().zip(inputs.iter()) {
            let (season, ok) = handle.join().unwrap();
            assert_eq!(season, expected);
            assert!(ok);
        }
    });
}
