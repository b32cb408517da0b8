//! Application context wiring.

use crate::auth_usecase::AuthUseCase;
use crate::search_usecase::SearchUseCase;
use cirrus_core::audit::AuditLog;
use cirrus_core::auth::Authenticator;
use cirrus_core::config::AppConfig;
use cirrus_core::session::SessionManager;
use cirrus_core::storage::StateStore;
use cirrus_core::weather::WeatherProvider;
use std::sync::Arc;

/// Wires the store, authenticator, and weather provider into the use cases.
///
/// The store/session/audit state is passed in explicitly rather than living
/// in globals; there is exactly one context per process.
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub sessions: SessionManager,
    pub audit: AuditLog,
    pub auth: AuthUseCase,
    pub search: SearchUseCase,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        store: Arc<dyn StateStore>,
        authenticator: Authenticator,
        weather: Arc<dyn WeatherProvider>,
    ) -> Self {
        let sessions = SessionManager::new(store.clone());
        let audit = AuditLog::new(store);
        let auth = AuthUseCase::new(sessions.clone(), audit.clone(), authenticator);
        let search = SearchUseCase::new(audit.clone(), weather);

        Self {
            config,
            sessions,
            audit,
            auth,
            search,
        }
    }
}
