//! Container tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use testbed_domain::error::{Error, Result};
use testbed_domain::ports::Disposable;
use testbed_infrastructure::di::{CapabilityKey, Container, RegistrationKind};

trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

struct English;

impl Greeter for English {
    fn greet(&self) -> String {
        "hello".to_string()
    }
}

struct French;

impl Greeter for French {
    fn greet(&self) -> String {
        "bonjour".to_string()
    }
}

struct Recorder {
    name: &'static str,
    released: Arc<Mutex<Vec<&'static str>>>,
    fail: bool,
}

impl Disposable for Recorder {
    fn dispose(&self) -> Result<()> {
        self.released.lock().expect("lock").push(self.name);
        if self.fail {
            return Err(Error::internal("release failed"));
        }
        Ok(())
    }

    fn resource_name(&self) -> &str {
        self.name
    }
}

#[test]
fn test_register_and_resolve_trait_object() {
    let container = Container::new();
    container
        .register_instance::<dyn Greeter>(Arc::new(English))
        .expect("register");

    let greeter = container.resolve::<dyn Greeter>().expect("resolve");

    assert_eq!(greeter.greet(), "hello");
    assert_eq!(
        container.registration_kind(&CapabilityKey::of::<dyn Greeter>()),
        Some(RegistrationKind::Instance)
    );
}

#[test]
fn test_named_registrations_are_distinct() {
    let container = Container::new();
    container
        .register_named_instance::<dyn Greeter>("en", Arc::new(English))
        .expect("register en");
    container
        .register_named_instance::<dyn Greeter>("fr", Arc::new(French))
        .expect("register fr");

    assert_eq!(container.resolve_named::<dyn Greeter>("fr").expect("fr").greet(), "bonjour");
    assert!(matches!(
        container.resolve::<dyn Greeter>(),
        Err(Error::CapabilityNotRegistered { .. })
    ));
    assert_eq!(CapabilityKey::named::<dyn Greeter>("fr").name(), Some("fr"));
}

#[test]
fn test_duplicate_registration_fails() {
    let container = Container::new();
    container
        .register_instance::<dyn Greeter>(Arc::new(English))
        .expect("first registration");

    let result = container.register_instance::<dyn Greeter>(Arc::new(French));

    assert!(matches!(result, Err(Error::DuplicateRegistration { .. })));
}

#[test]
fn test_replace_records_override() {
    let container = Container::new();
    container
        .register_instance::<dyn Greeter>(Arc::new(English))
        .expect("register");

    container
        .replace_instance::<dyn Greeter>(Arc::new(French), "fixture prefers french")
        .expect("replace");

    assert_eq!(container.resolve::<dyn Greeter>().expect("resolve").greet(), "bonjour");
    let overrides = container.overrides();
    assert_eq!(overrides.len(), 1);
    assert_eq!(overrides[0].reason, "fixture prefers french");
}

#[test]
fn test_replace_requires_existing_registration() {
    let container = Container::new();

    let result = container.replace_instance::<dyn Greeter>(Arc::new(French), "nothing to replace");

    assert!(matches!(result, Err(Error::CapabilityNotRegistered { .. })));
}

#[test]
fn test_lazy_is_built_once_and_factory_every_time() {
    let container = Container::new();
    let lazy_builds = Arc::new(AtomicUsize::new(0));
    let factory_builds = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&lazy_builds);
    container
        .register_lazy::<String, _>(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new("lazy".to_string()))
        })
        .expect("register lazy");
    let counter = Arc::clone(&factory_builds);
    container
        .register_factory::<u32, _>(move |_| Ok(Arc::new(counter.fetch_add(1, Ordering::SeqCst) as u32)))
        .expect("register factory");

    let first = container.resolve::<String>().expect("lazy");
    let second = container.resolve::<String>().expect("lazy again");
    container.resolve::<u32>().expect("factory");
    container.resolve::<u32>().expect("factory again");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(lazy_builds.load(Ordering::SeqCst), 1);
    assert_eq!(factory_builds.load(Ordering::SeqCst), 2);
}

#[test]
fn test_lazy_factory_can_resolve_other_capabilities() {
    let container = Container::new();
    container
        .register_instance::<dyn Greeter>(Arc::new(English))
        .expect("register greeter");
    container
        .register_lazy::<String, _>(|c| Ok(Arc::new(format!("{}, world", c.resolve::<dyn Greeter>()?.greet()))))
        .expect("register lazy");

    assert_eq!(container.resolve::<String>().expect("resolve").as_str(), "hello, world");
}

#[test]
fn test_disabled_capability_fails_with_reason() {
    let container = Container::new();
    container
        .register_disabled::<dyn Greeter>("greetings are off")
        .expect("register disabled");

    let err = container.resolve::<dyn Greeter>().err().expect("disabled");

    assert!(err.is_capability_disabled());
    assert!(err.to_string().contains("greetings are off"));
    assert!(container.is_registered::<dyn Greeter>());
    assert!(container.is_disabled::<dyn Greeter>());
    assert!(container.resolve_all::<dyn Greeter>().is_err());
}

#[test]
fn test_collections_keep_registration_order() {
    let container = Container::new();
    container
        .add_to_collection::<dyn Greeter>(Arc::new(English))
        .expect("add en");
    container
        .add_to_collection::<dyn Greeter>(Arc::new(French))
        .expect("add fr");

    let greetings: Vec<String> = container
        .resolve_all::<dyn Greeter>()
        .expect("resolve all")
        .iter()
        .map(|g| g.greet())
        .collect();

    assert_eq!(greetings, vec!["hello", "bonjour"]);
    assert!(container.resolve_all::<dyn Disposable>().expect("empty").is_empty());
}

#[test]
fn test_sealed_container_refuses_registration() {
    let container = Container::new();
    container.seal();

    let result = container.register_instance::<dyn Greeter>(Arc::new(English));

    assert!(matches!(result, Err(Error::ContainerSealed { .. })));
}

#[test]
fn test_dispose_releases_in_reverse_order_and_is_idempotent() {
    let container = Container::new();
    let released = Arc::new(Mutex::new(Vec::new()));
    for (name, fail) in [("first", false), ("second", true), ("third", false)] {
        container
            .track_disposable(Arc::new(Recorder {
                name,
                released: Arc::clone(&released),
                fail,
            }))
            .expect("track");
    }
    container
        .register_instance::<dyn Greeter>(Arc::new(English))
        .expect("register");

    let first = container.dispose();
    let second = container.dispose();

    assert!(first.is_err(), "failure of one resource is reported");
    assert!(second.is_ok());
    assert_eq!(*released.lock().expect("lock"), vec!["third", "second", "first"]);
    assert!(matches!(
        container.resolve::<dyn Greeter>(),
        Err(Error::ContainerDisposed { .. })
    ));
}
