//! Request authenticator and refresh coordinator.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::timeout;
use tracing::{debug, warn};

use atelier_domain::{Envelope, TokenPayload};

use crate::error::{ApiError, ApiResult};
use crate::ports::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::session::{RefreshGate, SessionStore};

const AUTHORIZATION: &str = "Authorization";
const DEFAULT_REFRESH_TIMEOUT: Duration = Duration::from_secs(30);

/// Session lifecycle notifications for navigation and toast collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The session ended and could not be recovered; the subscriber should
    /// route to the login entry point and surface the reason.
    LoggedOut {
        /// User-facing explanation.
        reason: String,
    },
}

/// Attaches credentials to outgoing API requests and recovers transparently
/// from a single authorization failure.
///
/// Every request to the application's own API (URL containing `/api/`)
/// gets the bearer header. On a 401 or 419 the coordinator performs at most
/// one refresh process-wide, guarded by a [`RefreshGate`]; a caller that
/// finds the gate occupied fails fast into logout rather than queueing. The
/// refresh call itself is bounded by a timeout so a hung server can never
/// occupy the gate forever.
pub struct Authenticator {
    transport: Arc<dyn HttpTransport>,
    store: Arc<SessionStore>,
    gate: RefreshGate,
    refresh_url: String,
    refresh_timeout: Duration,
    events: broadcast::Sender<SessionEvent>,
}

impl Authenticator {
    /// Creates a coordinator over the given transport and session store.
    ///
    /// `refresh_url` is the absolute URL of the token refresh endpoint.
    #[must_use]
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        store: Arc<SessionStore>,
        refresh_url: impl Into<String>,
    ) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            transport,
            store,
            gate: RefreshGate::new(),
            refresh_url: refresh_url.into(),
            refresh_timeout: DEFAULT_REFRESH_TIMEOUT,
            events,
        }
    }

    /// Overrides the deadline for the refresh call.
    #[must_use]
    pub const fn with_refresh_timeout(mut self, refresh_timeout: Duration) -> Self {
        self.refresh_timeout = refresh_timeout;
        self
    }

    /// Subscribes to session lifecycle events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// The session store this coordinator mutates.
    #[must_use]
    pub const fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    fn is_api_url(url: &str) -> bool {
        url.contains("/api/")
    }

    const fn is_unauthorized(status: u16) -> bool {
        // 419 carries session-expiry semantics on this API.
        status == 401 || status == 419
    }

    /// Sends a request, attaching the bearer credential and recovering from
    /// a single authorization failure.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::SessionExpired`] when the session could not be
    /// recovered (the store is cleared and one [`SessionEvent::LoggedOut`]
    /// is emitted), or a transport error when no response was obtained.
    /// Non-2xx statuses other than a recoverable 401/419 come back as
    /// ordinary responses for the caller to interpret.
    pub async fn execute(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let api_request = Self::is_api_url(&request.url);
        let mut outgoing = request.clone();
        if api_request {
            if let Some(value) = self.store.credential().await.authorization_value() {
                outgoing.set_header(AUTHORIZATION, value);
            }
        }

        let response = self.transport.send(outgoing).await?;
        if !api_request || !Self::is_unauthorized(response.status) {
            return Ok(response);
        }
        self.recover(request).await
    }

    /// Runs the single-flight refresh and retries the original request once.
    async fn recover(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let Some(refresh_token) = self.store.credential().await.refresh_token else {
            return Err(self.force_logout("Your session has expired.").await);
        };

        let Some(permit) = self.gate.try_begin() else {
            // Another request is already refreshing. Fail fast instead of
            // queueing so a burst cannot trigger inconsistent retries.
            return Err(self.force_logout("Your session has expired.").await);
        };
        debug!(url = %request.url, "access token rejected, refreshing session");

        let outcome = timeout(self.refresh_timeout, self.request_refresh(&refresh_token)).await;
        drop(permit);

        let payload = match outcome {
            Ok(Ok(payload)) => payload,
            Ok(Err(error)) => {
                warn!(%error, "token refresh failed");
                return Err(self.force_logout("Your session has expired.").await);
            }
            Err(_) => {
                warn!(timeout_secs = self.refresh_timeout.as_secs(), "token refresh timed out");
                return Err(self.force_logout("Your session has expired.").await);
            }
        };

        if payload.access_token.is_none() {
            return Err(self.force_logout("Your session has expired.").await);
        }
        self.store.apply_refresh(&payload).await;
        debug!("session refreshed, retrying original request");

        // The retry must carry the freshly stored token, not the value
        // captured when the chain started.
        let mut retry = request;
        if let Some(value) = self.store.credential().await.authorization_value() {
            retry.set_header(AUTHORIZATION, value);
        }
        // A second unauthorized response is not retried again; it reaches
        // the caller as an ordinary API failure.
        Ok(self.transport.send(retry).await?)
    }

    async fn request_refresh(&self, refresh_token: &str) -> ApiResult<TokenPayload> {
        let request = HttpRequest::new(HttpMethod::Post, &self.refresh_url)
            .with_json(serde_json::json!({ "refresh_token": refresh_token }));
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::Api {
                status: response.status,
                message: "token refresh rejected".to_string(),
            });
        }
        let envelope: Envelope<TokenPayload> = response
            .json()
            .map_err(|error| ApiError::Decode(error.to_string()))?;
        Ok(envelope.into_data()?)
    }

    /// Terminal failure path: clear the session, notify subscribers once,
    /// and hand back the error the chain converges on.
    async fn force_logout(&self, reason: &str) -> ApiError {
        self.store.clear().await;
        let _ = self.events.send(SessionEvent::LoggedOut {
            reason: reason.to_string(),
        });
        ApiError::SessionExpired
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::ports::TransportError;
    use crate::session::MemoryTokenStorage;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    const API: &str = "https://school.test/api/v1";

    #[derive(Debug)]
    enum Scripted {
        Reply(u16, serde_json::Value),
        DelayedReply(Duration, u16, serde_json::Value),
        Hang,
    }

    /// Transport double: responses are scripted per URL substring, sent
    /// requests are recorded for inspection.
    #[derive(Default)]
    struct ScriptedTransport {
        routes: Mutex<Vec<(String, VecDeque<Scripted>)>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        fn script(&self, url_part: &str, response: Scripted) {
            let mut routes = self.routes.lock().unwrap();
            if let Some((_, queue)) = routes.iter_mut().find(|(part, _)| part == url_part) {
                queue.push_back(response);
            } else {
                routes.push((url_part.to_string(), VecDeque::from([response])));
            }
        }

        fn sent(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn sent_to(&self, url_part: &str) -> Vec<HttpRequest> {
            self.sent()
                .into_iter()
                .filter(|request| request.url.contains(url_part))
                .collect()
        }
    }

    #[async_trait]
    impl HttpTransport for ScriptedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(request.clone());
            let scripted = {
                let mut routes = self.routes.lock().unwrap();
                let (_, queue) = routes
                    .iter_mut()
                    .find(|(part, _)| request.url.contains(part.as_str()))
                    .unwrap_or_else(|| panic!("no script for {}", request.url));
                queue.pop_front().expect("script exhausted")
            };
            match scripted {
                Scripted::Reply(status, body) => {
                    Ok(HttpResponse::new(status, body.to_string().into_bytes()))
                }
                Scripted::DelayedReply(delay, status, body) => {
                    tokio::time::sleep(delay).await;
                    Ok(HttpResponse::new(status, body.to_string().into_bytes()))
                }
                Scripted::Hang => {
                    std::future::pending::<()>().await;
                    unreachable!()
                }
            }
        }
    }

    fn envelope(data: serde_json::Value) -> serde_json::Value {
        serde_json::json!({ "status": "success", "message": "ok", "data": data })
    }

    fn unauthorized_body() -> serde_json::Value {
        serde_json::json!({ "status": "error", "message": "Unauthenticated." })
    }

    async fn logged_in_store(access: &str, refresh: Option<&str>) -> Arc<SessionStore> {
        let store = Arc::new(SessionStore::new(
            Arc::new(MemoryTokenStorage::new()),
            Arc::new(MemoryTokenStorage::new()),
        ));
        store
            .set_session(
                &TokenPayload {
                    access_token: Some(access.to_string()),
                    refresh_token: refresh.map(String::from),
                    token_type: Some("Bearer".to_string()),
                    expires_in: Some(3600),
                },
                None,
                false,
            )
            .await;
        store
    }

    fn authenticator(
        transport: &Arc<ScriptedTransport>,
        store: &Arc<SessionStore>,
    ) -> Authenticator {
        Authenticator::new(
            transport.clone() as Arc<dyn HttpTransport>,
            store.clone(),
            format!("{API}/auth/refresh"),
        )
    }

    #[tokio::test]
    async fn attaches_bearer_header_to_api_requests() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.script("/students", Scripted::Reply(200, envelope(serde_json::json!([]))));
        let store = logged_in_store("a1", Some("r1")).await;
        let auth = authenticator(&transport, &store);

        let response = auth
            .execute(HttpRequest::new(HttpMethod::Get, format!("{API}/students")))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].header("Authorization"), Some("Bearer a1"));
    }

    #[tokio::test]
    async fn third_party_urls_pass_through_unmodified() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.script(
            "example.org",
            Scripted::Reply(401, serde_json::json!({})),
        );
        let store = logged_in_store("a1", Some("r1")).await;
        let auth = authenticator(&transport, &store);

        let response = auth
            .execute(HttpRequest::new(
                HttpMethod::Get,
                "https://example.org/feed",
            ))
            .await
            .unwrap();

        // No header, no refresh, no logout: the 401 is the caller's problem.
        assert_eq!(response.status, 401);
        assert_eq!(transport.sent()[0].header("Authorization"), None);
        assert!(store.is_authenticated().await);
        assert!(transport.sent_to("/auth/refresh").is_empty());
    }

    #[tokio::test]
    async fn refreshes_once_and_retries_with_the_new_token() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.script("/students", Scripted::Reply(401, unauthorized_body()));
        transport.script(
            "/auth/refresh",
            Scripted::Reply(
                200,
                envelope(serde_json::json!({
                    "access_token": "a2",
                    "refresh_token": "r2",
                    "token_type": "Bearer",
                    "expires_in": 3600
                })),
            ),
        );
        transport.script("/students", Scripted::Reply(200, envelope(serde_json::json!([]))));
        let store = logged_in_store("a1", Some("r1")).await;
        let auth = authenticator(&transport, &store);

        let response = auth
            .execute(HttpRequest::new(HttpMethod::Get, format!("{API}/students")))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        let refreshes = transport.sent_to("/auth/refresh");
        assert_eq!(refreshes.len(), 1);
        assert_eq!(
            refreshes[0].body.as_ref().unwrap()["refresh_token"],
            serde_json::json!("r1")
        );
        let student_calls = transport.sent_to("/students");
        assert_eq!(student_calls.len(), 2);
        assert_eq!(student_calls[0].header("Authorization"), Some("Bearer a1"));
        assert_eq!(student_calls[1].header("Authorization"), Some("Bearer a2"));
        assert_eq!(
            store.credential().await.access_token.as_deref(),
            Some("a2")
        );
    }

    #[tokio::test]
    async fn unauthorized_without_refresh_token_forces_logout() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.script("/students", Scripted::Reply(401, unauthorized_body()));
        let store = logged_in_store("a1", None).await;
        let auth = authenticator(&transport, &store);
        let mut events = auth.subscribe();

        let error = auth
            .execute(HttpRequest::new(HttpMethod::Get, format!("{API}/students")))
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::SessionExpired));
        assert!(!store.is_authenticated().await);
        assert!(transport.sent_to("/auth/refresh").is_empty());
        // Exactly one notification for the failed chain.
        assert!(matches!(
            events.try_recv().unwrap(),
            SessionEvent::LoggedOut { .. }
        ));
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn refresh_without_access_token_clears_and_does_not_retry() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.script("/students", Scripted::Reply(401, unauthorized_body()));
        transport.script(
            "/auth/refresh",
            Scripted::Reply(200, envelope(serde_json::json!({ "token_type": "Bearer" }))),
        );
        let store = logged_in_store("a1", Some("r1")).await;
        let auth = authenticator(&transport, &store);

        let error = auth
            .execute(HttpRequest::new(HttpMethod::Get, format!("{API}/students")))
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::SessionExpired));
        assert!(!store.is_authenticated().await);
        // Original request went out once; no retry followed.
        assert_eq!(transport.sent_to("/students").len(), 1);
    }

    #[tokio::test]
    async fn refresh_failure_forces_logout() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.script("/students", Scripted::Reply(401, unauthorized_body()));
        transport.script("/auth/refresh", Scripted::Reply(401, unauthorized_body()));
        let store = logged_in_store("a1", Some("r1")).await;
        let auth = authenticator(&transport, &store);

        let error = auth
            .execute(HttpRequest::new(HttpMethod::Get, format!("{API}/students")))
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::SessionExpired));
        assert!(!store.is_authenticated().await);
    }

    #[tokio::test]
    async fn second_caller_fails_fast_while_refresh_is_in_flight() {
        let transport = Arc::new(ScriptedTransport::default());
        // Both requests hit 401 immediately; the refresh is slow enough
        // that the loser observes the occupied gate.
        transport.script("/students", Scripted::Reply(401, unauthorized_body()));
        transport.script("/guardians", Scripted::Reply(401, unauthorized_body()));
        let refreshed = envelope(serde_json::json!({
            "access_token": "a2",
            "token_type": "Bearer"
        }));
        transport.script(
            "/auth/refresh",
            Scripted::DelayedReply(Duration::from_millis(50), 200, refreshed),
        );
        transport.script("/students", Scripted::Reply(200, envelope(serde_json::json!([]))));
        transport.script("/guardians", Scripted::Reply(200, envelope(serde_json::json!([]))));
        let store = logged_in_store("a1", Some("r1")).await;
        let auth = Arc::new(authenticator(&transport, &store));

        let first = auth.execute(HttpRequest::new(
            HttpMethod::Get,
            format!("{API}/students"),
        ));
        let second = auth.execute(HttpRequest::new(
            HttpMethod::Get,
            format!("{API}/guardians"),
        ));
        let (first, second) = tokio::join!(first, second);

        // Exactly one refresh call process-wide.
        assert_eq!(transport.sent_to("/auth/refresh").len(), 1);
        // One chain recovered, the other terminated in forced logout.
        let outcomes = [first.is_ok(), second.is_ok()];
        assert_eq!(outcomes.iter().filter(|ok| **ok).count(), 1);
        let failed = if first.is_err() { first } else { second };
        assert!(matches!(failed.unwrap_err(), ApiError::SessionExpired));
    }

    #[tokio::test]
    async fn occupied_gate_sends_the_caller_to_logout() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.script("/students", Scripted::Reply(401, unauthorized_body()));
        let store = logged_in_store("a1", Some("r1")).await;
        let auth = authenticator(&transport, &store);
        let _held = auth.gate.try_begin().unwrap();

        let error = auth
            .execute(HttpRequest::new(HttpMethod::Get, format!("{API}/students")))
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::SessionExpired));
        assert!(transport.sent_to("/auth/refresh").is_empty());
    }

    #[tokio::test]
    async fn hung_refresh_times_out_and_releases_the_gate() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.script("/students", Scripted::Reply(401, unauthorized_body()));
        transport.script("/auth/refresh", Scripted::Hang);
        let store = logged_in_store("a1", Some("r1")).await;
        let auth =
            authenticator(&transport, &store).with_refresh_timeout(Duration::from_millis(50));

        let error = auth
            .execute(HttpRequest::new(HttpMethod::Get, format!("{API}/students")))
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::SessionExpired));
        // The gate must not stay occupied after the timeout.
        assert!(!auth.gate.is_refreshing());
    }

    #[tokio::test]
    async fn retry_that_stays_unauthorized_is_returned_to_the_caller() {
        let transport = Arc::new(ScriptedTransport::default());
        transport.script("/students", Scripted::Reply(401, unauthorized_body()));
        transport.script(
            "/auth/refresh",
            Scripted::Reply(
                200,
                envelope(serde_json::json!({ "access_token": "a2", "token_type": "Bearer" })),
            ),
        );
        transport.script("/students", Scripted::Reply(401, unauthorized_body()));
        let store = logged_in_store("a1", Some("r1")).await;
        let auth = authenticator(&transport, &store);

        let response = auth
            .execute(HttpRequest::new(HttpMethod::Get, format!("{API}/students")))
            .await
            .unwrap();

        // No second refresh; the 401 propagates as an ordinary response.
        assert_eq!(response.status, 401);
        assert_eq!(transport.sent_to("/auth/refresh").len(), 1);
    }
}
