//! Application state for the board CLI.
//!
//! Wires the keychain session store, console notifier and recording
//! navigator into a single [`MainApi`] instance.

use std::sync::Arc;

use crate::api::transport::{ReqwestTransport, Transport};
use crate::api::MainApi;
use crate::config::ClientConfig;
use crate::session::{KeychainSessionStore, SessionStore};
use crate::ui::{CliNavigator, ConsoleNotifier, Notifier};

pub struct AppState<T: Transport = ReqwestTransport> {
    /// HTTP client for board API communication.
    pub api: MainApi<T>,

    /// Session keys shared with the API hooks.
    pub session: Arc<dyn SessionStore>,

    /// Holds the redirect requested by the last command, if any.
    pub navigator: Arc<CliNavigator>,
}

impl AppState<ReqwestTransport> {
    pub fn new(config: &ClientConfig) -> Self {
        let session: Arc<dyn SessionStore> =
            Arc::new(KeychainSessionStore::new(&config.keychain_service));
        let navigator = Arc::new(CliNavigator::new());
        let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);

        let api = MainApi::from_config(config, Arc::clone(&session), navigator.clone(), notifier);

        Self {
            api,
            session,
            navigator,
        }
    }
}

impl<T: Transport> AppState<T> {
    /// Assemble state around an existing client and its collaborators.
    pub fn from_parts(
        api: MainApi<T>,
        session: Arc<dyn SessionStore>,
        navigator: Arc<CliNavigator>,
    ) -> Self {
        Self {
            api,
            session,
            navigator,
        }
    }
}
