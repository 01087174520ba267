use hashbrown::HashMap;
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

/// Process-wide key/value registry used by application code to hand shared
/// services (typically the router) to screens.
///
/// Values are type-erased on `provide` and downcast on `get`; a missing key
/// or a wrong-type downcast is `None`, never a panic. The routing core does
/// not depend on this beyond being a value stored in it.
#[derive(Default)]
pub struct ServiceLocator {
    entries: HashMap<String, Rc<dyn Any>>,
}

impl std::fmt::Debug for ServiceLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceLocator")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl ServiceLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn provide<T: 'static>(&mut self, key: impl Into<String>, value: T) {
        self.entries.insert(key.into(), Rc::new(value));
    }

    /// Stores an already-shared value without re-wrapping it.
    pub fn provide_shared<T: 'static>(&mut self, key: impl Into<String>, value: Rc<T>) {
        self.entries.insert(key.into(), value);
    }

    pub fn get<T: 'static>(&self, key: &str) -> Option<Rc<T>> {
        self.entries.get(key)?.clone().downcast::<T>().ok()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }
}

thread_local! {
    static GLOBAL: RefCell<ServiceLocator> = RefCell::new(ServiceLocator::new());
}

/// Stores a value in the thread's global locator.
pub fn provide<T: 'static>(key: impl Into<String>, value: T) {
    GLOBAL.with(|cell| cell.borrow_mut().provide(key, value));
}

pub fn provide_shared<T: 'static>(key: impl Into<String>, value: Rc<T>) {
    GLOBAL.with(|cell| cell.borrow_mut().provide_shared(key, value));
}

/// Fetches a value from the thread's global locator.
pub fn get<T: 'static>(key: &str) -> Option<Rc<T>> {
    GLOBAL.with(|cell| cell.borrow().get::<T>(key))
}
