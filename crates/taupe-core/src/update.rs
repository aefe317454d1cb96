//! Update-available notifications consumed by the reload prompt.

use crate::store::{Store, Subscription};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum UpdateStatus {
    #[default]
    Idle,
    /// Assets are cached; the app works without a network connection.
    OfflineReady,
    /// A newer build is waiting to be activated by a reload.
    NeedRefresh,
}

type ReloadListener = Arc<dyn Fn() + Send + Sync>;

/// Channel between the host's update detection and the reload prompt.
#[derive(Clone, Default)]
pub struct UpdateChannel {
    status: Store<UpdateStatus>,
    reload_listeners: Arc<Mutex<Vec<ReloadListener>>>,
}

impl UpdateChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> UpdateStatus {
        self.status.get()
    }

    pub fn mark_offline_ready(&self) {
        tracing::info!("App ready to work offline");
        self.status.set(UpdateStatus::OfflineReady);
    }

    pub fn mark_need_refresh(&self) {
        tracing::info!("New content available");
        self.status.set(UpdateStatus::NeedRefresh);
    }

    /// Hides the prompt without reloading.
    pub fn dismiss(&self) {
        self.status.set(UpdateStatus::Idle);
    }

    /// Hides the prompt and, if a refresh was pending, asks the host to reload.
    ///
    /// Returns whether a reload was requested.
    pub fn accept(&self) -> bool {
        let previous = self.status.replace(UpdateStatus::Idle);

        if previous != UpdateStatus::NeedRefresh {
            return false;
        }

        tracing::info!("Reloading to activate the new version");
        let listeners: Vec<ReloadListener> = self.reload_listeners.lock().clone();
        for listener in listeners {
            listener();
        }
        true
    }

    /// Registers the host's reload action.
    pub fn on_reload<F>(&self, listener: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.reload_listeners.lock().push(Arc::new(listener));
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&UpdateStatus) + Send + Sync + 'static,
    {
        self.status.subscribe(callback)
    }

    pub fn store(&self) -> &Store<UpdateStatus> {
        &self.status
    }
}

impl PartialEq for UpdateChannel {
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status
    }
}

impl std::fmt::Debug for UpdateChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateChannel")
            .field("status", &self.status())
            .field("reload_listeners", &self.reload_listeners.lock().len())
            .finish()
    }
}
