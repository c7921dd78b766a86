//! CLI command implementations

pub mod batch;
pub mod convert;
pub mod interactive;
pub mod profiles;

use crate::GlobalArgs;
use anyhow::{Context, Result};
use cmyk_core::icc::{DirectorySource, IccProfiles, Lcms2Engine, MoxcmsEngine};
use cmyk_core::{Config, Converter, EngineKind, IccStatus};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::debug;

/// Resolve the configuration: file first, then flag overrides
pub fn load_config(global: &GlobalArgs) -> Result<Config> {
    let mut config = match &global.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(dir) = &global.profiles_dir {
        config.profiles_dir = dir.clone();
    }
    if let Some(engine) = global.engine {
        config.engine = engine;
    }
    if let Some(intent) = global.intent {
        config.intent = intent;
    }
    if global.no_icc {
        config.icc_enabled = false;
    }
    debug!(?config, "effective configuration");
    Ok(config)
}

/// The profile registry for whichever engine is configured
pub enum Icc {
    Disabled,
    Lcms2(Arc<IccProfiles<Lcms2Engine>>),
    Moxcms(Arc<IccProfiles<MoxcmsEngine>>),
}

impl Icc {
    pub fn new(config: &Config) -> Self {
        if !config.icc_enabled {
            return Icc::Disabled;
        }
        let profiles = config.profiles.clone();
        match config.engine {
            EngineKind::Lcms2 => Icc::Lcms2(Arc::new(
                IccProfiles::new(profiles).with_intent(config.intent),
            )),
            EngineKind::Moxcms => Icc::Moxcms(Arc::new(
                IccProfiles::new(profiles).with_intent(config.intent),
            )),
        }
    }

    /// Start loading profiles in the background
    pub fn start(&self, source: DirectorySource) -> Option<JoinHandle<()>> {
        match self {
            Icc::Disabled => None,
            Icc::Lcms2(r) => r.spawn_initialize(Lcms2Engine::connect, source),
            Icc::Moxcms(r) => r.spawn_initialize(MoxcmsEngine::connect, source),
        }
    }

    /// Wait for loading to settle; `None` when disabled
    pub fn wait(&self, timeout: Duration) -> Option<IccStatus> {
        match self {
            Icc::Disabled => None,
            Icc::Lcms2(r) => Some(r.wait(timeout)),
            Icc::Moxcms(r) => Some(r.wait(timeout)),
        }
    }

    pub fn status(&self) -> Option<IccStatus> {
        match self {
            Icc::Disabled => None,
            Icc::Lcms2(r) => Some(r.status()),
            Icc::Moxcms(r) => Some(r.status()),
        }
    }

    /// Formula adapters plus this registry's profile adapters
    pub fn converter(&self) -> Converter {
        match self {
            Icc::Disabled => Converter::new(),
            Icc::Lcms2(r) => Converter::with_profiles(r),
            Icc::Moxcms(r) => Converter::with_profiles(r),
        }
    }
}

/// Config, registry and converter, with profile loading already started
pub struct Session {
    pub config: Config,
    pub icc: Icc,
    pub converter: Converter,
}

impl Session {
    pub fn start(global: &GlobalArgs) -> Result<Self> {
        let config = load_config(global)?;
        let icc = Icc::new(&config);
        // detached: the registry reports progress through its status
        let _ = icc.start(config.profile_source());
        let converter = icc.converter();
        Ok(Self {
            config,
            icc,
            converter,
        })
    }
}

/// User text as handed to the parser
///
/// The core parser rejects surrounding whitespace. The front end drops it,
/// line terminators included, before parsing.
pub fn input_text(raw: &str) -> &str {
    raw.trim()
}

/// JSON for stdout
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}
