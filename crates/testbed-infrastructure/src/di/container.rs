//! Per-test capability container

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use testbed_domain::error::{Error, Result};
use testbed_domain::ports::Disposable;
use tracing::{debug, warn};
use uuid::Uuid;

/// Stored value: always an `Arc<T>` behind `Any`
type AnyArc = Box<dyn Any + Send + Sync>;
type FactoryFn = Box<dyn Fn(&Container) -> Result<AnyArc> + Send + Sync>;

// ============================================================================
// Capability keys
// ============================================================================

/// Identity of a capability: contract type plus optional name qualifier
#[derive(Clone, Copy)]
pub struct CapabilityKey {
    type_id: TypeId,
    type_name: &'static str,
    name: Option<&'static str>,
}

impl CapabilityKey {
    /// Key of the unnamed capability `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            name: None,
        }
    }

    /// Key of capability `T` qualified by `name`
    pub fn named<T: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            name: Some(name),
            ..Self::of::<T>()
        }
    }

    /// Contract type name
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Name qualifier
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }
}

impl PartialEq for CapabilityKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.name == other.name
    }
}

impl Eq for CapabilityKey {}

impl Hash for CapabilityKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
        self.name.hash(state);
    }
}

impl fmt::Display for CapabilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "{}[{name}]", self.type_name),
            None => f.write_str(self.type_name),
        }
    }
}

impl fmt::Debug for CapabilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// ============================================================================
// Registrations
// ============================================================================

enum Registration {
    Instance(AnyArc),
    Lazy {
        factory: FactoryFn,
        value: OnceLock<AnyArc>,
    },
    Factory(FactoryFn),
    Disabled {
        reason: String,
    },
}

/// How a capability is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationKind {
    /// Ready-made singleton
    Instance,
    /// Singleton built on first resolution
    Lazy,
    /// Built on every resolution
    Factory,
    /// Intentionally absent
    Disabled,
    /// Collection of implementations
    Collection,
}

impl Registration {
    fn kind(&self) -> RegistrationKind {
        match self {
            Self::Instance(_) => RegistrationKind::Instance,
            Self::Lazy { .. } => RegistrationKind::Lazy,
            Self::Factory(_) => RegistrationKind::Factory,
            Self::Disabled { .. } => RegistrationKind::Disabled,
        }
    }
}

/// An explicit replacement of an existing registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideRecord {
    /// Replaced capability
    pub capability: String,
    /// Why it was replaced
    pub reason: String,
}

fn erase<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> AnyArc {
    Box::new(value)
}

fn downcast<T: ?Sized + Send + Sync + 'static>(key: &CapabilityKey, value: &AnyArc) -> Result<Arc<T>> {
    value
        .downcast_ref::<Arc<T>>()
        .cloned()
        .ok_or_else(|| Error::internal(format!("'{key}' holds a value of another type")))
}

fn erase_factory<T, F>(factory: F) -> FactoryFn
where
    T: ?Sized + Send + Sync + 'static,
    F: Fn(&Container) -> Result<Arc<T>> + Send + Sync + 'static,
{
    Box::new(move |container| factory(container).map(erase))
}

// ============================================================================
// Container
// ============================================================================

/// Registry of the capabilities wired for one test
pub struct Container {
    id: Uuid,
    registrations: DashMap<CapabilityKey, Arc<Registration>>,
    collections: DashMap<CapabilityKey, Vec<AnyArc>>,
    disposables: Mutex<Vec<Arc<dyn Disposable>>>,
    overrides: Mutex<Vec<OverrideRecord>>,
    sealed: AtomicBool,
    disposed: AtomicBool,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    /// Create an empty, unsealed container
    ///
    /// Stages can run against any container; only the one created through
    /// [`super::ContainerLifecycle`] is the live container.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            registrations: DashMap::new(),
            collections: DashMap::new(),
            disposables: Mutex::new(Vec::new()),
            overrides: Mutex::new(Vec::new()),
            sealed: AtomicBool::new(false),
            disposed: AtomicBool::new(false),
        }
    }

    /// Unique container id
    pub fn id(&self) -> Uuid {
        self.id
    }

    fn ensure_alive(&self) -> Result<()> {
        if self.disposed.load(Ordering::Acquire) {
            return Err(Error::ContainerDisposed {
                id: self.id.to_string(),
            });
        }
        Ok(())
    }

    fn ensure_writable(&self, key: &CapabilityKey) -> Result<()> {
        self.ensure_alive()?;
        if self.sealed.load(Ordering::Acquire) {
            return Err(Error::ContainerSealed {
                id: self.id.to_string(),
                capability: key.to_string(),
            });
        }
        Ok(())
    }

    fn insert(&self, key: CapabilityKey, registration: Registration) -> Result<()> {
        self.ensure_writable(&key)?;
        if self.collections.contains_key(&key) {
            return Err(Error::DuplicateRegistration {
                capability: key.to_string(),
            });
        }
        match self.registrations.entry(key) {
            Entry::Occupied(_) => Err(Error::DuplicateRegistration {
                capability: key.to_string(),
            }),
            Entry::Vacant(slot) => {
                debug!(capability = %key, kind = ?registration.kind(), "Registered capability");
                slot.insert(Arc::new(registration));
                Ok(())
            }
        }
    }

    fn replace(&self, key: CapabilityKey, registration: Registration, reason: &str) -> Result<()> {
        self.ensure_writable(&key)?;
        match self.registrations.entry(key) {
            Entry::Vacant(_) => Err(Error::CapabilityNotRegistered {
                capability: key.to_string(),
            }),
            Entry::Occupied(mut slot) => {
                slot.insert(Arc::new(registration));
                warn!(capability = %key, reason, "Replaced container registration");
                self.overrides
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(OverrideRecord {
                        capability: key.to_string(),
                        reason: reason.to_string(),
                    });
                Ok(())
            }
        }
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a ready-made singleton
    pub fn register_instance<T: ?Sized + Send + Sync + 'static>(&self, value: Arc<T>) -> Result<()> {
        self.insert(CapabilityKey::of::<T>(), Registration::Instance(erase(value)))
    }

    /// Register a ready-made singleton under a name qualifier
    pub fn register_named_instance<T: ?Sized + Send + Sync + 'static>(
        &self,
        name: &'static str,
        value: Arc<T>,
    ) -> Result<()> {
        self.insert(CapabilityKey::named::<T>(name), Registration::Instance(erase(value)))
    }

    /// Register a singleton built on first resolution
    pub fn register_lazy<T, F>(&self, factory: F) -> Result<()>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Container) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        self.insert(
            CapabilityKey::of::<T>(),
            Registration::Lazy {
                factory: erase_factory(factory),
                value: OnceLock::new(),
            },
        )
    }

    /// Register a factory invoked on every resolution
    pub fn register_factory<T, F>(&self, factory: F) -> Result<()>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Container) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        self.insert(
            CapabilityKey::of::<T>(),
            Registration::Factory(erase_factory(factory)),
        )
    }

    /// Mark capability `T` as intentionally absent
    pub fn register_disabled<T: ?Sized + 'static>(&self, reason: impl Into<String>) -> Result<()> {
        self.register_disabled_key(CapabilityKey::of::<T>(), reason)
    }

    /// Mark any capability key as intentionally absent
    pub fn register_disabled_key(&self, key: CapabilityKey, reason: impl Into<String>) -> Result<()> {
        self.insert(
            key,
            Registration::Disabled {
                reason: reason.into(),
            },
        )
    }

    /// Add an implementation to the collection of `T`
    pub fn add_to_collection<T: ?Sized + Send + Sync + 'static>(&self, value: Arc<T>) -> Result<()> {
        let key = CapabilityKey::of::<T>();
        self.ensure_writable(&key)?;
        if self.registrations.contains_key(&key) {
            return Err(Error::DuplicateRegistration {
                capability: key.to_string(),
            });
        }
        self.collections.entry(key).or_default().push(erase(value));
        Ok(())
    }

    /// Replace an existing registration with a ready-made singleton
    ///
    /// The replacement is recorded and logged.
    pub fn replace_instance<T: ?Sized + Send + Sync + 'static>(
        &self,
        value: Arc<T>,
        reason: &str,
    ) -> Result<()> {
        self.replace(
            CapabilityKey::of::<T>(),
            Registration::Instance(erase(value)),
            reason,
        )
    }

    /// Replace an existing registration with a lazily built singleton
    pub fn replace_lazy<T, F>(&self, factory: F, reason: &str) -> Result<()>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Container) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        self.replace(
            CapabilityKey::of::<T>(),
            Registration::Lazy {
                factory: erase_factory(factory),
                value: OnceLock::new(),
            },
            reason,
        )
    }

    /// Release `resource` when the container is disposed
    pub fn track_disposable(&self, resource: Arc<dyn Disposable>) -> Result<()> {
        self.ensure_alive()?;
        self.disposables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(resource);
        Ok(())
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Resolve the unnamed capability `T`
    pub fn resolve<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>> {
        self.resolve_key(CapabilityKey::of::<T>())
    }

    /// Resolve capability `T` registered under `name`
    pub fn resolve_named<T: ?Sized + Send + Sync + 'static>(&self, name: &'static str) -> Result<Arc<T>> {
        self.resolve_key(CapabilityKey::named::<T>(name))
    }

    fn resolve_key<T: ?Sized + Send + Sync + 'static>(&self, key: CapabilityKey) -> Result<Arc<T>> {
        self.ensure_alive()?;
        // Clone out of the map so factories can resolve other capabilities
        let registration = self
            .registrations
            .get(&key)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| Error::CapabilityNotRegistered {
                capability: key.to_string(),
            })?;

        match registration.as_ref() {
            Registration::Instance(value) => downcast(&key, value),
            Registration::Lazy { factory, value } => {
                if let Some(existing) = value.get() {
                    return downcast(&key, existing);
                }
                let built = factory(self)?;
                let resolved = downcast(&key, &built);
                // First build wins
                let _ = value.set(built);
                resolved
            }
            Registration::Factory(factory) => downcast(&key, &factory(self)?),
            Registration::Disabled { reason } => {
                Err(Error::capability_disabled(key.to_string(), reason.clone()))
            }
        }
    }

    /// Resolve every implementation in the collection of `T`
    ///
    /// An empty collection resolves to an empty list; a disabled marker
    /// fails.
    pub fn resolve_all<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Vec<Arc<T>>> {
        self.ensure_alive()?;
        let key = CapabilityKey::of::<T>();
        let disabled_reason = self.registrations.get(&key).and_then(|entry| {
            match entry.value().as_ref() {
                Registration::Disabled { reason } => Some(reason.clone()),
                _ => None,
            }
        });
        if let Some(reason) = disabled_reason {
            return Err(Error::capability_disabled(key.to_string(), reason));
        }

        match self.collections.get(&key) {
            Some(items) => items.iter().map(|item| downcast(&key, item)).collect(),
            None => Ok(Vec::new()),
        }
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Whether `T` has any registration, disabled markers included
    pub fn is_registered<T: ?Sized + 'static>(&self) -> bool {
        self.is_registered_key(&CapabilityKey::of::<T>())
    }

    /// Whether `key` has any registration, disabled markers included
    pub fn is_registered_key(&self, key: &CapabilityKey) -> bool {
        self.registrations.contains_key(key) || self.collections.contains_key(key)
    }

    /// Whether `T` is registered as disabled
    pub fn is_disabled<T: ?Sized + 'static>(&self) -> bool {
        self.registration_kind(&CapabilityKey::of::<T>()) == Some(RegistrationKind::Disabled)
    }

    /// How `key` is registered
    pub fn registration_kind(&self, key: &CapabilityKey) -> Option<RegistrationKind> {
        if self.collections.contains_key(key) {
            return Some(RegistrationKind::Collection);
        }
        self.registrations
            .get(key)
            .map(|entry| entry.value().kind())
    }

    /// Every registered key, sorted by display name
    pub fn registered_keys(&self) -> Vec<CapabilityKey> {
        let mut keys: Vec<CapabilityKey> = self
            .registrations
            .iter()
            .map(|entry| *entry.key())
            .chain(self.collections.iter().map(|entry| *entry.key()))
            .collect();
        keys.sort_by_key(ToString::to_string);
        keys
    }

    /// Replacements made through `replace_*`
    pub fn overrides(&self) -> Vec<OverrideRecord> {
        self.overrides
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Refuse further registrations
    pub fn seal(&self) {
        self.sealed.store(true, Ordering::Release);
    }

    /// Whether registrations are refused
    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::Acquire)
    }

    /// Whether the container has been disposed
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Release owned resources in reverse registration order
    ///
    /// Every resource is released even if an earlier one fails; the
    /// failures are reported together. Disposing twice is a no-op.
    pub fn dispose(&self) -> Result<()> {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }

        let resources: Vec<Arc<dyn Disposable>> = self
            .disposables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .rev()
            .collect();

        let mut failures = Vec::new();
        for resource in &resources {
            if let Err(e) = resource.dispose() {
                warn!(container = %self.id, resource = resource.resource_name(), error = %e, "Failed to release resource");
                failures.push(format!("{}: {e}", resource.resource_name()));
            }
        }

        self.registrations.clear();
        self.collections.clear();
        debug!(container = %self.id, released = resources.len(), "Disposed container");

        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::internal(format!(
                "Container {} released with failures: {}",
                self.id,
                failures.join("; ")
            )))
        }
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("id", &self.id)
            .field("registrations", &self.registrations.len())
            .field("collections", &self.collections.len())
            .field("sealed", &self.is_sealed())
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
