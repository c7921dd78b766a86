//! ICC profile transforms
//!
//! A [`IccProfiles`] registry owns one sRGB to CMYK transform per configured
//! print profile. The transforms are built exactly once, in order, by an
//! initialization sequence that can run on a background thread:
//!
//! ```text
//! Uninitialized -> Loading -> Ready
//!                          \-> Failed (terminal)
//! ```
//!
//! Any failing step (engine, fetch, parse, transform) fails the whole
//! sequence. Transforms built before the failure are dropped, never exposed.
//!
//! # Example
//!
//! ```no_run
//! use cmyk_core::icc::{DirectorySource, IccProfiles, Lcms2Engine, default_profiles};
//!
//! let registry = IccProfiles::<Lcms2Engine>::new(default_profiles());
//! registry.initialize(Lcms2Engine::connect, &DirectorySource::new("profiles"));
//! println!("{:?}", registry.status());
//! ```

mod engine;
mod lcms2_engine;
mod moxcms_engine;
mod source;

pub use engine::{CmsEngine, EngineKind, RenderingIntent};
pub use lcms2_engine::Lcms2Engine;
pub use moxcms_engine::{MoxcmsEngine, MoxcmsTransform};
pub use source::{DirectorySource, MemorySource, ProfileSource};

use crate::adapter::{AdapterDescriptor, CmykAdapter, Readiness};
use crate::cmyk::{Cmyk, ConversionResult};
use crate::color::CanonicalColor;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use std::time::Duration;

/// A configured print profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IccProfileDescriptor {
    /// Stable key conversions are requested by
    pub key: String,
    /// Location handed to the [`ProfileSource`]
    pub path: String,
    pub title: String,
    pub url: String,
    #[serde(default = "default_badge")]
    pub badge: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_badge() -> String {
    "ICC Profile".into()
}

impl IccProfileDescriptor {
    /// Display metadata for the adapter list
    pub fn to_adapter_descriptor(&self) -> AdapterDescriptor {
        AdapterDescriptor {
            id: self.key.clone(),
            title: self.title.clone(),
            url: self.url.clone(),
            badge: self.badge.clone(),
            description: self.description.clone(),
        }
    }
}

/// The four print conditions shipped by default
pub fn default_profiles() -> Vec<IccProfileDescriptor> {
    let profile = |key: &str, path: &str, title: &str, url: &str, desc: &str| IccProfileDescriptor {
        key: key.into(),
        path: path.into(),
        title: title.into(),
        url: url.into(),
        badge: default_badge(),
        description: Some(desc.into()),
    };
    vec![
        profile(
            "generic",
            "GenericCMYK.icc",
            "Generic CMYK",
            "https://www.littlecms.com/",
            "Generic device profile (baseline)",
        ),
        profile(
            "fogra39",
            "FOGRA39.icc",
            "FOGRA39",
            "https://www.eci.org/",
            "European coated paper (ISO 12647-2)",
        ),
        profile(
            "gracol",
            "GRACoL2013_CRPC6.icc",
            "GRACoL 2013",
            "https://www.idealliance.org/",
            "North American commercial printing",
        ),
        profile(
            "swop",
            "SWOP2013C3_CRPC5.icc",
            "SWOP 2013",
            "https://www.idealliance.org/",
            "North American web offset printing",
        ),
    ]
}

/// Registry lifecycle as seen by callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "lowercase")]
pub enum IccStatus {
    Uninitialized,
    Loading,
    Ready,
    /// Permanent for the life of the registry
    Failed(String),
}

impl IccStatus {
    /// Still waiting on (or yet to start) initialization
    pub fn is_pending(&self) -> bool {
        matches!(self, IccStatus::Uninitialized | IccStatus::Loading)
    }
}

enum State<E: CmsEngine> {
    Uninitialized,
    Loading,
    Ready {
        engine: E,
        transforms: HashMap<String, E::Transform>,
    },
    Failed(String),
}

impl<E: CmsEngine> State<E> {
    fn status(&self) -> IccStatus {
        match self {
            State::Uninitialized => IccStatus::Uninitialized,
            State::Loading => IccStatus::Loading,
            State::Ready { .. } => IccStatus::Ready,
            State::Failed(reason) => IccStatus::Failed(reason.clone()),
        }
    }
}

/// One-time initialized set of sRGB to CMYK profile transforms
pub struct IccProfiles<E: CmsEngine> {
    profiles: Vec<IccProfileDescriptor>,
    intent: RenderingIntent,
    state: Mutex<State<E>>,
    settled: Condvar,
}

impl<E: CmsEngine> IccProfiles<E> {
    /// Create an uninitialized registry; transforms default to the perceptual intent
    pub fn new(profiles: Vec<IccProfileDescriptor>) -> Self {
        Self {
            profiles,
            intent: RenderingIntent::Perceptual,
            state: Mutex::new(State::Uninitialized),
            settled: Condvar::new(),
        }
    }

    /// Build transforms with a different rendering intent
    pub fn with_intent(mut self, intent: RenderingIntent) -> Self {
        self.intent = intent;
        self
    }

    pub fn intent(&self) -> RenderingIntent {
        self.intent
    }

    /// Configured profiles, in initialization order
    pub fn profiles(&self) -> &[IccProfileDescriptor] {
        &self.profiles
    }

    pub fn status(&self) -> IccStatus {
        self.lock().status()
    }

    pub fn is_ready(&self) -> bool {
        matches!(*self.lock(), State::Ready { .. })
    }

    /// The failure reason, once initialization has failed
    pub fn error(&self) -> Option<String> {
        match &*self.lock() {
            State::Failed(reason) => Some(reason.clone()),
            _ => None,
        }
    }

    /// Name of the engine in use, once ready
    pub fn engine_name(&self) -> Option<&'static str> {
        match &*self.lock() {
            State::Ready { engine, .. } => Some(engine.name()),
            _ => None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, State<E>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Claim the one initialization slot
    fn begin(&self) -> bool {
        let mut state = self.lock();
        if matches!(*state, State::Uninitialized) {
            *state = State::Loading;
            true
        } else {
            false
        }
    }

    fn finish(&self, outcome: Result<(E, HashMap<String, E::Transform>)>) {
        let next = match outcome {
            Ok((engine, transforms)) => {
                tracing::info!(
                    engine = engine.name(),
                    profiles = transforms.len(),
                    "ICC profiles ready"
                );
                State::Ready { engine, transforms }
            }
            Err(e) => {
                tracing::error!(error = %e, "ICC initialization error");
                State::Failed(e.to_string())
            }
        };
        *self.lock() = next;
        self.settled.notify_all();
    }

    /// Run the initialization sequence on the calling thread
    ///
    /// Only the first call does any work; later calls return the current
    /// status. There is no retry after a failure.
    pub fn initialize<F>(&self, connect: F, source: &dyn ProfileSource) -> IccStatus
    where
        F: FnOnce() -> Result<E>,
    {
        if self.begin() {
            let outcome = load(connect, source, &self.profiles, self.intent);
            self.finish(outcome);
        }
        self.status()
    }

    /// Block until initialization settles or `timeout` elapses
    pub fn wait(&self, timeout: Duration) -> IccStatus {
        let state = self.lock();
        let (state, _) = self
            .settled
            .wait_timeout_while(state, timeout, |s| matches!(s, State::Loading))
            .unwrap_or_else(PoisonError::into_inner);
        state.status()
    }

    /// Convert through the named profile
    ///
    /// `None` unless the registry is ready and knows `key`. A failing pixel
    /// transform is reported for this call only.
    pub fn convert(&self, color: &CanonicalColor, key: &str) -> Option<ConversionResult> {
        let state = self.lock();
        let State::Ready { engine, transforms } = &*state else {
            return None;
        };
        let transform = transforms.get(key)?;
        let rgb = color.to_rgb();
        match engine.transform_pixel(transform, rgb.to_array()) {
            Ok(bytes) => Some(ConversionResult::new(Cmyk::from_device_bytes(bytes), rgb)),
            Err(reason) => {
                let error = Error::Pixel(reason);
                tracing::warn!(profile = key, %error, "ICC conversion error");
                None
            }
        }
    }
}

impl<E: CmsEngine> IccProfiles<E> {
    /// Start initialization on a background thread
    ///
    /// The registry is `Loading` by the time this returns. Returns `None` if
    /// initialization was already claimed by an earlier call.
    pub fn spawn_initialize<F, S>(self: &Arc<Self>, connect: F, source: S) -> Option<JoinHandle<()>>
    where
        F: FnOnce() -> Result<E> + Send + 'static,
        S: ProfileSource + Send + 'static,
    {
        if !self.begin() {
            return None;
        }
        let registry = Arc::clone(self);
        let spawned = std::thread::Builder::new()
            .name("icc-init".into())
            .spawn(move || {
                let outcome = load(connect, &source, &registry.profiles, registry.intent);
                registry.finish(outcome);
            });
        match spawned {
            Ok(handle) => Some(handle),
            Err(e) => {
                self.finish(Err(Error::EngineUnavailable(format!(
                    "could not start initialization thread: {e}"
                ))));
                None
            }
        }
    }
}

impl<E: CmsEngine> std::fmt::Debug for IccProfiles<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IccProfiles")
            .field("profiles", &self.profiles.len())
            .field("status", &self.status())
            .finish()
    }
}

/// The initialization sequence: engine, reference profile, then each target
fn load<E, F>(
    connect: F,
    source: &dyn ProfileSource,
    profiles: &[IccProfileDescriptor],
    intent: RenderingIntent,
) -> Result<(E, HashMap<String, E::Transform>)>
where
    E: CmsEngine,
    F: FnOnce() -> Result<E>,
{
    tracing::info!(profiles = profiles.len(), "loading ICC profiles");
    let engine = connect()?;
    let reference = engine
        .reference_profile()
        .map_err(|reason| Error::EngineUnavailable(format!("Failed to create sRGB profile: {reason}")))?;

    let mut transforms = HashMap::with_capacity(profiles.len());
    for profile in profiles {
        let key = &profile.key;
        let data = source.fetch(profile)?;
        let target = engine.open_profile(&data).map_err(|reason| Error::ProfileParse {
            key: key.clone(),
            reason,
        })?;
        let transform = engine
            .create_rgb_to_cmyk(&reference, &target, intent)
            .map_err(|reason| Error::Transform {
                key: key.clone(),
                reason,
            })?;
        tracing::debug!(profile = %key, bytes = data.len(), engine = engine.name(), "profile transform built");
        transforms.insert(key.clone(), transform);
    }
    Ok((engine, transforms))
}

/// A single profile exposed as a CMYK adapter
pub struct ProfileAdapter<E: CmsEngine> {
    descriptor: AdapterDescriptor,
    registry: Arc<IccProfiles<E>>,
}

impl<E: CmsEngine> ProfileAdapter<E> {
    pub fn new(registry: Arc<IccProfiles<E>>, profile: &IccProfileDescriptor) -> Self {
        Self {
            descriptor: profile.to_adapter_descriptor(),
            registry,
        }
    }

    /// One adapter per configured profile, in registry order
    pub fn for_all(registry: &Arc<IccProfiles<E>>) -> Vec<Self> {
        registry
            .profiles()
            .iter()
            .map(|p| Self::new(Arc::clone(registry), p))
            .collect()
    }
}

impl<E: CmsEngine> CmykAdapter for ProfileAdapter<E> {
    fn descriptor(&self) -> &AdapterDescriptor {
        &self.descriptor
    }

    fn convert(&self, color: &CanonicalColor) -> Option<ConversionResult> {
        self.registry.convert(color, &self.descriptor.id)
    }

    fn readiness(&self) -> Readiness {
        match self.registry.status() {
            IccStatus::Ready => Readiness::Ready,
            IccStatus::Uninitialized | IccStatus::Loading => Readiness::Loading,
            IccStatus::Failed(reason) => Readiness::Unavailable(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_order() {
        let keys: Vec<_> = default_profiles().into_iter().map(|p| p.key).collect();
        assert_eq!(keys, ["generic", "fogra39", "gracol", "swop"]);
    }

    #[test]
    fn test_descriptor_badge_defaults() {
        let json = r#"{"key":"x","path":"x.icc","title":"X","url":"https://example.com"}"#;
        let profile: IccProfileDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(profile.badge, "ICC Profile");
        assert_eq!(profile.description, None);
        assert_eq!(profile.to_adapter_descriptor().id, "x");
    }

    #[test]
    fn test_uninitialized_registry_converts_nothing() {
        let registry = IccProfiles::<Lcms2Engine>::new(default_profiles());
        assert_eq!(registry.status(), IccStatus::Uninitialized);
        let color = crate::parse::parse("#3498db", crate::parse::InputMode::Hex).unwrap();
        assert_eq!(registry.convert(&color, "generic"), None);
        assert_eq!(registry.error(), None);
    }

    #[test]
    fn test_status_serializes_with_reason() {
        let json = serde_json::to_string(&IccStatus::Failed("boom".into())).unwrap();
        assert_eq!(json, r#"{"state":"failed","reason":"boom"}"#);
        let json = serde_json::to_string(&IccStatus::Ready).unwrap();
        assert_eq!(json, r#"{"state":"ready"}"#);
    }
}
