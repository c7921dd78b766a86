//! Both engines against a real CMYK output profile
//!
//! The profile comes from `CMYK_TEST_PROFILE`, or else the first default
//! profile found in the workspace `profiles/` directory. Without one the
//! tests print a notice and pass.

use cmyk_core::icc::{
    CmsEngine, IccProfileDescriptor, IccProfiles, Lcms2Engine, MemorySource, MoxcmsEngine,
    RenderingIntent, default_profiles,
};
use cmyk_core::{CanonicalColor, IccStatus, Rgb8};
use std::path::PathBuf;

/// Maximum per-channel difference between lcms2 and moxcms, in device bytes
const ENGINE_PARITY_TOLERANCE: u8 = 26;

const WHITE: [u8; 3] = [255, 255, 255];
const BLACK: [u8; 3] = [0, 0, 0];
const CYAN: [u8; 3] = [0, 255, 255];
const BLUE: [u8; 3] = [52, 152, 219];

fn fixture() -> Option<(PathBuf, Vec<u8>)> {
    let candidates: Vec<PathBuf> = match std::env::var_os("CMYK_TEST_PROFILE") {
        Some(path) => vec![PathBuf::from(path)],
        None => {
            let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../profiles");
            default_profiles()
                .iter()
                .map(|p| dir.join(&p.path))
                .collect()
        }
    };
    let found = candidates
        .into_iter()
        .find_map(|path| std::fs::read(&path).ok().map(|data| (path, data)));
    if found.is_none() {
        eprintln!(
            "SKIPPED: no CMYK profile; set CMYK_TEST_PROFILE or place one of the default profiles in profiles/"
        );
    }
    found
}

/// Device bytes for a few reference pixels
fn run_engine<E: CmsEngine>(engine: &E, data: &[u8]) -> Vec<[u8; 4]> {
    let srgb = engine.reference_profile().unwrap();
    let target = engine.open_profile(data).unwrap();
    let transform = engine
        .create_rgb_to_cmyk(&srgb, &target, RenderingIntent::Perceptual)
        .unwrap();
    [WHITE, BLACK, CYAN, BLUE]
        .into_iter()
        .map(|rgb| engine.transform_pixel(&transform, rgb).unwrap())
        .collect()
}

/// Channel order is C, M, Y, K with paper white carrying no ink
fn check_channels(name: &str, pixels: &[[u8; 4]]) {
    let [white, black, cyan, blue] = [pixels[0], pixels[1], pixels[2], pixels[3]];
    eprintln!("{name}: white {white:?} black {black:?} cyan {cyan:?} blue {blue:?}");

    assert!(white.iter().all(|&v| v <= 13), "{name} white {white:?}");
    assert!(black[3] >= 128, "{name} black {black:?}");
    assert!(
        cyan[0] > cyan[1].saturating_add(64) && cyan[0] > cyan[2].saturating_add(64),
        "{name} cyan {cyan:?}"
    );
    assert!(blue[0] > blue[1] && blue[1] > blue[2], "{name} blue {blue:?}");
}

#[test]
fn test_lcms2_channel_order() {
    let Some((path, data)) = fixture() else {
        return;
    };
    eprintln!("profile: {}", path.display());
    check_channels("lcms2", &run_engine(&Lcms2Engine, &data));
}

#[test]
fn test_moxcms_channel_order() {
    let Some((path, data)) = fixture() else {
        return;
    };
    eprintln!("profile: {}", path.display());
    check_channels("moxcms", &run_engine(&MoxcmsEngine, &data));
}

#[test]
fn test_engines_agree() {
    let Some((_, data)) = fixture() else {
        return;
    };
    let lcms2 = run_engine(&Lcms2Engine, &data);
    let moxcms = run_engine(&MoxcmsEngine, &data);
    for (a, b) in lcms2.iter().zip(&moxcms) {
        for (x, y) in a.iter().zip(b) {
            assert!(x.abs_diff(*y) <= ENGINE_PARITY_TOLERANCE, "lcms2 {a:?} vs moxcms {b:?}");
        }
    }
}

#[test]
fn test_registry_converts_with_real_profile() {
    let Some((path, data)) = fixture() else {
        return;
    };
    let descriptor = IccProfileDescriptor {
        key: "fixture".into(),
        path: path.display().to_string(),
        title: "Fixture".into(),
        url: String::new(),
        badge: "ICC Profile".into(),
        description: None,
    };
    let source = MemorySource::new().with("fixture", data);

    let registry = IccProfiles::<Lcms2Engine>::new(vec![descriptor]);
    assert_eq!(registry.initialize(Lcms2Engine::connect, &source), IccStatus::Ready);

    let color = CanonicalColor::Rgb(Rgb8::new(0, 0, 0));
    let result = registry.convert(&color, "fixture").unwrap();
    assert_eq!(result.hex, "#000000");
    assert!(result.k >= 50, "{result:?}");
    let white = registry
        .convert(&CanonicalColor::Rgb(Rgb8::new(255, 255, 255)), "fixture")
        .unwrap();
    assert!(white.cmyk().to_array().iter().all(|&v| v <= 5), "{white:?}");
}
