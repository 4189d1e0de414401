//! Smart-home setup: wires collaborators and exposes the endpoint.

use std::fmt;
use std::sync::Arc;

use alexa_bridge_domain::entity_config::EntityConfig;
use alexa_bridge_domain::entity_filter::EntityFilter;
use alexa_bridge_domain::error::BridgeError;

use crate::config::SmartHomeConfig;
use crate::ports::{AccessTokenProvider, ProactiveReporter, ViewRegistrar};

/// Settings block the smart-home feature is configured from.
#[derive(Debug, Clone, Default)]
pub struct SmartHomeSettings {
    /// OAuth client id issued by the voice assistant cloud.
    pub client_id: Option<String>,
    /// OAuth client secret matching `client_id`.
    pub client_secret: Option<String>,
    /// Public event-gateway endpoint for proactive reports.
    pub endpoint: Option<String>,
    /// Which entities are exposed.
    pub filter: EntityFilter,
    /// Per-entity overrides.
    pub entity_config: EntityConfig,
}

impl SmartHomeSettings {
    /// Client credentials, when both id and secret are set and non-empty.
    #[must_use]
    pub fn credentials(&self) -> Option<ClientCredentials> {
        let client_id = self.client_id.as_deref().filter(|v| !v.is_empty())?;
        let client_secret = self.client_secret.as_deref().filter(|v| !v.is_empty())?;
        Some(ClientCredentials {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        })
    }
}

/// OAuth client credentials an auth manager is bound to.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Result of [`setup`]: the shared configuration and the auth manager, if any.
///
/// The auth manager is returned rather than stored globally so that other
/// components (e.g. a cloud relay calling the message handler directly) can
/// be handed the very same instance.
pub struct SmartHome<A> {
    pub config: Arc<SmartHomeConfig<A>>,
    pub auth: Option<Arc<A>>,
}

impl<A> fmt::Debug for SmartHome<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmartHome")
            .field("config", &self.config)
            .field("auth", &self.auth.is_some())
            .finish()
    }
}

/// Activate the smart-home endpoint.
///
/// 1. When both client id and secret are configured, build an auth manager
///    with `make_auth`.
/// 2. Build the shared [`SmartHomeConfig`], wiring the auth manager in as
///    token accessor (absent otherwise).
/// 3. Register the smart-home view with `registrar`.
/// 4. With an auth manager, enable proactive reporting through `reporter`.
///
/// # Errors
///
/// Propagates registration and proactive-mode failures unchanged. Missing
/// credentials are not an error.
pub async fn setup<A, F, P, R>(
    settings: SmartHomeSettings,
    make_auth: F,
    reporter: &P,
    registrar: &mut R,
) -> Result<SmartHome<A>, BridgeError>
where
    A: AccessTokenProvider + 'static,
    F: FnOnce(ClientCredentials) -> A,
    P: ProactiveReporter,
    R: ViewRegistrar<A>,
{
    let auth = settings.credentials().map(|credentials| {
        tracing::debug!(client_id = %credentials.client_id, "creating smart home auth manager");
        Arc::new(make_auth(credentials))
    });

    let config = Arc::new(SmartHomeConfig::new(
        settings.endpoint,
        auth.clone(),
        settings.filter,
        settings.entity_config,
    ));

    registrar.register_smart_home(Arc::clone(&config))?;
    tracing::info!("smart home endpoint registered");

    if auth.is_some() {
        reporter.enable_proactive_mode(Arc::clone(&config)).await?;
        tracing::info!(endpoint = ?config.endpoint(), "proactive mode enabled");
    } else {
        tracing::debug!("no client credentials configured, proactive mode disabled");
    }

    Ok(SmartHome { config, auth })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alexa_bridge_domain::error::BoxError;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct StubAuth {
        credentials: ClientCredentials,
    }

    impl AccessTokenProvider for StubAuth {
        async fn access_token(&self) -> Result<String, BridgeError> {
            Ok(format!("token-for-{}", self.credentials.client_id))
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        calls: AtomicUsize,
        fail: bool,
    }

    impl ProactiveReporter for RecordingReporter {
        async fn enable_proactive_mode<A: AccessTokenProvider + 'static>(
            &self,
            _config: Arc<SmartHomeConfig<A>>,
        ) -> Result<(), BridgeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                let source: BoxError = "event gateway rejected".into();
                return Err(BridgeError::Proactive(source));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingRegistrar {
        registered: Mutex<Vec<Arc<SmartHomeConfig<StubAuth>>>>,
        fail: bool,
    }

    impl ViewRegistrar<StubAuth> for RecordingRegistrar {
        fn register_smart_home(
            &mut self,
            config: Arc<SmartHomeConfig<StubAuth>>,
        ) -> Result<(), BridgeError> {
            if self.fail {
                let source: BoxError = "path already registered".into();
                return Err(BridgeError::Registration(source));
            }
            self.registered.lock().unwrap().push(config);
            Ok(())
        }
    }

    fn make_auth(credentials: ClientCredentials) -> StubAuth {
        StubAuth { credentials }
    }

    fn settings_with(client_id: Option<&str>, client_secret: Option<&str>) -> SmartHomeSettings {
        SmartHomeSettings {
            client_id: client_id.map(ToString::to_string),
            client_secret: client_secret.map(ToString::to_string),
            endpoint: Some("https://api.amazonalexa.com/v3/events".to_string()),
            ..SmartHomeSettings::default()
        }
    }

    #[tokio::test]
    async fn should_register_auth_and_enable_proactive_mode_when_credentials_present() {
        let reporter = RecordingReporter::default();
        let mut registrar = RecordingRegistrar::default();

        let smart_home = setup(
            settings_with(Some("client"), Some("secret")),
            make_auth,
            &reporter,
            &mut registrar,
        )
        .await
        .unwrap();

        let auth = smart_home.auth.expect("auth manager should be registered");
        assert_eq!(auth.credentials.client_id, "client");
        assert_eq!(auth.credentials.client_secret, "secret");
        assert!(smart_home.config.has_access_token());
        assert_eq!(
            smart_home.config.access_token().await.unwrap().as_deref(),
            Some("token-for-client")
        );
        assert_eq!(reporter.calls.load(Ordering::SeqCst), 1);
        assert_eq!(registrar.registered.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_skip_auth_and_proactive_mode_when_secret_missing() {
        let reporter = RecordingReporter::default();
        let mut registrar = RecordingRegistrar::default();

        let smart_home = setup(
            settings_with(Some("client"), None),
            make_auth,
            &reporter,
            &mut registrar,
        )
        .await
        .unwrap();

        assert!(smart_home.auth.is_none());
        assert!(!smart_home.config.has_access_token());
        assert_eq!(reporter.calls.load(Ordering::SeqCst), 0);
        assert_eq!(registrar.registered.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_skip_auth_and_proactive_mode_when_client_id_missing() {
        let reporter = RecordingReporter::default();
        let mut registrar = RecordingRegistrar::default();

        let smart_home = setup(
            settings_with(None, Some("secret")),
            make_auth,
            &reporter,
            &mut registrar,
        )
        .await
        .unwrap();

        assert!(smart_home.auth.is_none());
        assert_eq!(reporter.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_treat_empty_credentials_as_missing() {
        let reporter = RecordingReporter::default();
        let mut registrar = RecordingRegistrar::default();

        let smart_home = setup(
            settings_with(Some(""), Some("secret")),
            make_auth,
            &reporter,
            &mut registrar,
        )
        .await
        .unwrap();

        assert!(smart_home.auth.is_none());
        assert_eq!(reporter.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_register_the_same_config_it_returns() {
        let reporter = RecordingReporter::default();
        let mut registrar = RecordingRegistrar::default();

        let smart_home = setup(
            settings_with(None, None),
            make_auth,
            &reporter,
            &mut registrar,
        )
        .await
        .unwrap();

        let registered = registrar.registered.lock().unwrap();
        assert!(Arc::ptr_eq(&registered[0], &smart_home.config));
        assert_eq!(
            smart_home.config.endpoint(),
            Some("https://api.amazonalexa.com/v3/events")
        );
    }

    #[tokio::test]
    async fn should_propagate_registration_failure_without_enabling_proactive_mode() {
        let reporter = RecordingReporter::default();
        let mut registrar = RecordingRegistrar {
            fail: true,
            ..RecordingRegistrar::default()
        };

        let result = setup(
            settings_with(Some("client"), Some("secret")),
            make_auth,
            &reporter,
            &mut registrar,
        )
        .await;

        assert!(matches!(result, Err(BridgeError::Registration(_))));
        assert_eq!(reporter.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_propagate_proactive_mode_failure() {
        let reporter = RecordingReporter {
            fail: true,
            ..RecordingReporter::default()
        };
        let mut registrar = RecordingRegistrar::default();

        let result = setup(
            settings_with(Some("client"), Some("secret")),
            make_auth,
            &reporter,
            &mut registrar,
        )
        .await;

        assert!(matches!(result, Err(BridgeError::Proactive(_))));
    }

    #[test]
    fn should_redact_secret_in_debug_output() {
        let credentials = ClientCredentials {
            client_id: "client".to_string(),
            client_secret: "hunter2".to_string(),
        };
        let debug = format!("{credentials:?}");
        assert!(debug.contains("client"));
        assert!(!debug.contains("hunter2"));
    }
}
