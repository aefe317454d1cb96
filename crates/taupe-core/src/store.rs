//! An observable value shared across the view tree.
//!
//! [`Store`] replaces a UI framework's ambient reactive context with an
//! explicit handle: readers call [`Store::get`], writers call [`Store::set`]
//! or [`Store::update`], and anyone interested in changes holds a
//! [`Subscription`]. Notifications are delivered synchronously on the writing
//! thread, so every reader observes the last write as soon as the write
//! returns. Writers are serialized until their notifications finish, which
//! keeps notifications in write order across threads.

use parking_lot::{Mutex, ReentrantMutex, RwLock};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: RwLock<T>,
    writer: ReentrantMutex<()>,
    subscribers: Mutex<Vec<(u64, Callback<T>)>>,
    next_id: AtomicU64,
}

/// Cloneable handle to a shared, observable value.
///
/// Clones point at the same value; two handles compare equal when they do.
pub struct Store<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Store<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(value),
                writer: ReentrantMutex::new(()),
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.inner.value.read().clone()
    }

    /// Replaces the value and notifies subscribers.
    ///
    /// Writing a value equal to the current one does nothing.
    pub fn set(&self, value: T) {
        self.replace(value);
    }

    /// Replaces the value, notifies subscribers if it changed, and returns the
    /// previous value.
    pub fn replace(&self, value: T) -> T {
        let _writer = self.inner.writer.lock();
        let previous = {
            let mut current = self.inner.value.write();
            if *current == value {
                return value;
            }
            std::mem::replace(&mut *current, value)
        };

        self.notify();
        previous
    }

    /// Computes the next value from the current one under a single write lock,
    /// notifies subscribers if it changed, and returns it.
    pub fn update<F>(&self, f: F) -> T
    where
        F: FnOnce(&T) -> T,
    {
        let _writer = self.inner.writer.lock();
        let (next, changed) = {
            let mut current = self.inner.value.write();
            let next = f(&current);
            let changed = *current != next;
            if changed {
                *current = next.clone();
            }
            (next, changed)
        };

        if changed {
            self.notify();
        }
        next
    }

    /// Registers a callback invoked after every change.
    ///
    /// The callback stays registered until the returned [`Subscription`] is
    /// dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.subscribers.lock().push((id, Arc::new(callback)));

        let weak: Weak<Inner<T>> = Arc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.subscribers.lock().retain(|(other, _)| *other != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }

    fn notify(&self) {
        // Callbacks run without the value or subscriber locks held so they can
        // read the store or manage their own subscriptions. Each one sees the
        // value current at call time, so a nested write never leaves a later
        // subscriber behind.
        let callbacks: Vec<Callback<T>> = self
            .inner
            .subscribers
            .lock()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();

        for callback in callbacks {
            let value = self.get();
            callback(&value);
        }
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> PartialEq for Store<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &*self.inner.value.read())
            .field("subscribers", &self.inner.subscribers.lock().len())
            .finish()
    }
}

impl<T> Default for Store<T>
where
    T: Clone + Default + PartialEq + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Keeps a [`Store`] callback registered while alive.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Keeps the callback registered for the lifetime of the store.
    pub fn detach(mut self) {
        self.unsubscribe = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}
