//! City search flow: validate, look up, audit.

use cirrus_core::audit::{AuditAction, AuditEvent, AuditLog, AuditOutcome};
use cirrus_core::error::Result;
use cirrus_core::validation::validate_city_query;
use cirrus_core::weather::{WeatherProvider, WeatherReading};
use serde_json::json;
use std::sync::Arc;

/// Weather search use case.
///
/// Validation failures are local: they never reach the provider and leave
/// no audit entry. A submitted search audits `SEARCH`, then the lookup
/// outcome audits `READ` success or error. The caller runs one search at a
/// time; nothing here queues or cancels.
#[derive(Clone)]
pub struct SearchUseCase {
    audit: AuditLog,
    provider: Arc<dyn WeatherProvider>,
}

impl SearchUseCase {
    pub fn new(audit: AuditLog, provider: Arc<dyn WeatherProvider>) -> Self {
        Self { audit, provider }
    }

    /// Whether readings come from the mock generator.
    pub fn is_mock_mode(&self) -> bool {
        self.provider.is_mock()
    }

    /// Runs one search for `raw_query`.
    pub async fn search(&self, raw_query: &str) -> Result<WeatherReading> {
        let city = validate_city_query(raw_query).into_result()?;

        self.audit.record(
            AuditEvent::new(AuditAction::Search, AuditOutcome::Success)
                .with_query(city.clone())
                .with_message("Search submitted"),
        );

        match self.provider.current_by_city(&city).await {
            Ok(reading) => {
                tracing::debug!(city = %reading.city, condition = %reading.condition, "lookup succeeded");
                self.audit.record(
                    AuditEvent::new(AuditAction::Read, AuditOutcome::Success)
                        .with_query(city)
                        .with_message(format!(
                            "Weather: {}, {}°C",
                            reading.condition, reading.temp_c
                        ))
                        .with_meta(json!({ "mock": reading.mock })),
                );
                Ok(reading)
            }
            Err(err) => {
                self.audit.record(
                    AuditEvent::new(AuditAction::Read, AuditOutcome::Error)
                        .with_query(city)
                        .with_message(err.to_string()),
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cirrus_core::CirrusError;
    use cirrus_core::storage::MemoryStateStore;
    use cirrus_core::weather::MockWeatherProvider;

    fn usecase_with(provider: Arc<dyn WeatherProvider>) -> SearchUseCase {
        let store = Arc::new(MemoryStateStore::new());
        SearchUseCase::new(AuditLog::new(store), provider)
    }

    struct FailingProvider(CirrusError);

    #[async_trait::async_trait]
    impl WeatherProvider for FailingProvider {
        async fn current_by_city(&self, _city: &str) -> Result<WeatherReading> {
            Err(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_invalid_query_never_reaches_provider_or_audit() {
        let search = usecase_with(Arc::new(MockWeatherProvider));
        let err = search.search("   ").await.unwrap_err();
        assert!(err.is_validation());
        assert!(search.audit.entries().is_empty());
    }

    #[tokio::test]
    async fn test_successful_search_audits_search_then_read() {
        let search = usecase_with(Arc::new(MockWeatherProvider));
        let reading = search.search("  Paris ").await.unwrap();
        assert_eq!(reading.city, "Paris");
        assert!(reading.mock);

        let entries = search.audit.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].action, AuditAction::Search);
        assert_eq!(entries[0].query.as_deref(), Some("Paris"));
        assert_eq!(entries[0].message.as_deref(), Some("Search submitted"));

        assert_eq!(entries[1].action, AuditAction::Read);
        assert_eq!(entries[1].outcome, AuditOutcome::Success);
        assert_eq!(entries[1].meta, Some(json!({ "mock": true })));
        let message = entries[1].message.as_deref().unwrap();
        assert!(message.starts_with("Weather: "), "{message}");
        assert!(message.contains("°C"));
    }

    #[tokio::test]
    async fn test_failed_lookup_audits_read_error() {
        let search = usecase_with(Arc::new(FailingProvider(CirrusError::not_found(
            "City not found. Please check the spelling.",
        ))));

        let err = search.search("Atlantis").await.unwrap_err();
        assert!(err.to_string().contains("City not found"));

        let entries = search.audit.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].action, AuditAction::Read);
        assert_eq!(entries[1].outcome, AuditOutcome::Error);
        assert_eq!(
            entries[1].message.as_deref(),
            Some("City not found. Please check the spelling.")
        );
    }

    #[tokio::test]
    async fn test_mock_mode_flag_follows_provider() {
        assert!(usecase_with(Arc::new(MockWeatherProvider)).is_mock_mode());
        assert!(
            !usecase_with(Arc::new(FailingProvider(CirrusError::service("x")))).is_mock_mode()
        );
    }
}
