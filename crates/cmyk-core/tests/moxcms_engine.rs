//! moxcms engine against real profile bytes

use cmyk_core::icc::{CmsEngine, IccProfiles, MemorySource, MoxcmsEngine, RenderingIntent};
use cmyk_core::{IccStatus, icc::default_profiles};

/// An sRGB ICC profile as written by lcms2
fn srgb_bytes() -> Vec<u8> {
    lcms2::Profile::new_srgb()
        .icc()
        .expect("sRGB profile serializes")
}

#[test]
fn test_parses_foreign_srgb_profile() {
    let engine = MoxcmsEngine::connect().unwrap();
    let profile = engine.open_profile(&srgb_bytes()).unwrap();
    assert_eq!(profile.color_space, moxcms::DataColorSpace::Rgb);
    assert_eq!(engine.name(), "moxcms");
}

#[test]
fn test_garbage_bytes_rejected() {
    let err = MoxcmsEngine.open_profile(&[0u8; 16]).unwrap_err();
    eprintln!("moxcms parse error: {err}");
    assert!(err.starts_with("moxcms profile"), "{err}");
}

#[test]
fn test_rgb_target_rejected() {
    let engine = MoxcmsEngine;
    let srgb = engine.reference_profile().unwrap();
    let err = engine
        .create_rgb_to_cmyk(&srgb, &srgb, RenderingIntent::Perceptual)
        .err()
        .expect("RGB target must not yield an RGB to CMYK transform");
    assert!(err.contains("not CMYK"), "{err}");
}

#[test]
fn test_registry_failure_is_reported() {
    let registry = IccProfiles::<MoxcmsEngine>::new(default_profiles());
    let source = MemorySource::new()
        .with("generic", srgb_bytes())
        .with("fogra39", srgb_bytes());
    let status = registry.initialize(MoxcmsEngine::connect, &source);
    assert!(
        matches!(&status, IccStatus::Failed(reason) if reason.contains("generic")),
        "{status:?}"
    );
    assert!(!registry.is_ready());
}
