//! Observer registry
//!
//! Observers are held by `Weak` handle: attaching does not keep an observer
//! alive, and an observer dropped by its owner simply stops receiving
//! notifications.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, Weak};

use crate::error::{Error, Result};

/// Receives analysis completion notices
pub trait Observer: Send + Sync {
    fn update(&self, message: &str) -> Result<()>;
}

/// Shared observer that a registry can hold a weak handle to
///
/// Implemented for `Arc<O>` of any concrete observer and for
/// `Arc<dyn Observer>`.
pub trait ObserverHandle {
    fn downgrade_observer(&self) -> Weak<dyn Observer>;

    /// Address of the observer, used for identity comparison
    fn observer_ptr(&self) -> *const ();
}

impl<O: Observer + 'static> ObserverHandle for Arc<O> {
    fn downgrade_observer(&self) -> Weak<dyn Observer> {
        let handle: Weak<O> = Arc::downgrade(self);
        handle
    }

    fn observer_ptr(&self) -> *const () {
        Arc::as_ptr(self) as *const ()
    }
}

impl ObserverHandle for Arc<dyn Observer> {
    fn downgrade_observer(&self) -> Weak<dyn Observer> {
        Arc::downgrade(self)
    }

    fn observer_ptr(&self) -> *const () {
        Arc::as_ptr(self) as *const ()
    }
}

/// Ordered list of subscribers
///
/// Duplicates are allowed; the same observer attached twice is notified twice.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Weak<dyn Observer>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer to the end of the list
    pub fn attach<H: ObserverHandle + ?Sized>(&mut self, observer: &H) {
        self.observers.retain(|w| w.strong_count() > 0);
        self.observers.push(observer.downgrade_observer());
    }

    /// Remove the first handle pointing at `observer`
    ///
    /// Fails with [`Error::NotFound`] when the observer is not attached.
    pub fn detach<H: ObserverHandle + ?Sized>(&mut self, observer: &H) -> Result<()> {
        let target = observer.observer_ptr();
        let position = self
            .observers
            .iter()
            .position(|w| w.as_ptr() as *const () == target)
            .ok_or_else(|| Error::NotFound("Observer is not attached".into()))?;
        self.observers.remove(position);
        Ok(())
    }

    /// Deliver `message` to every live observer in attachment order
    ///
    /// An observer that returns an error or panics is logged and skipped.
    /// Returns the number of observers that accepted the message.
    pub fn notify(&self, message: &str) -> usize {
        let mut delivered = 0;
        for (index, handle) in self.observers.iter().enumerate() {
            let Some(observer) = handle.upgrade() else {
                continue;
            };
            match panic::catch_unwind(AssertUnwindSafe(|| observer.update(message))) {
                Ok(Ok(())) => delivered += 1,
                Ok(Err(e)) => {
                    tracing::warn!(observer = index, error = %e, "Observer update failed");
                }
                Err(_) => {
                    tracing::warn!(observer = index, "Observer panicked during update");
                }
            }
        }
        delivered
    }

    /// Number of attached observers that are still alive
    pub fn len(&self) -> usize {
        self.observers
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Prints notifications to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl Observer for ConsoleObserver {
    fn update(&self, message: &str) -> Result<()> {
        println!(">> [Observer] Notification: {}", message);
        Ok(())
    }
}

/// Stores every notification it receives
#[derive(Debug, Default)]
pub struct RecordingObserver {
    messages: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

impl Observer for RecordingObserver {
    fn update(&self, message: &str) -> Result<()> {
        self.messages
            .lock()
            .map_err(|_| Error::Observer("message log poisoned".into()))?
            .push(message.to_string());
        Ok(())
    }
}
