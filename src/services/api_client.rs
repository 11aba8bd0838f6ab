// ============================================================================
// API CLIENT - comunicación HTTP con el backend de productos
// ============================================================================
// Adds the bearer token (read from the SessionStore on every request) and
// turns any 401 into a logout plus a full-page redirect to the login view.
// No business logic lives here.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::services::error::ApiError;
use crate::stores::SessionStore;
use crate::utils::constants::LOGIN_PATH;
use crate::utils::navigation::{BrowserNavigator, Navigator};

thread_local! {
    static API_CLIENT: Rc<ApiClient> = Rc::new(ApiClient::new(
        CONFIG.api_url(),
        SessionStore::global(),
        Rc::new(BrowserNavigator),
    ));
}

/// Logs out and redirects on 401, once per login.
///
/// Several in-flight requests can come back 401 together; only the first one
/// for a given session generation acts, the rest are no-ops until the next
/// successful login.
pub struct UnauthorizedHandler {
    session: Rc<SessionStore>,
    navigator: Rc<dyn Navigator>,
    handled_generation: Cell<Option<u64>>,
}

impl UnauthorizedHandler {
    pub fn new(session: Rc<SessionStore>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            session,
            navigator,
            handled_generation: Cell::new(None),
        }
    }

    /// Returns `true` when this call performed the logout and redirect
    pub fn handle(&self) -> bool {
        let generation = self.session.generation();
        if self.handled_generation.get() == Some(generation) {
            log::debug!("🔒 401 already handled for this session");
            return false;
        }
        self.handled_generation.set(Some(generation));

        log::warn!("🔒 401 received, logging out");
        self.session.logout();
        self.navigator.redirect(LOGIN_PATH);
        true
    }
}

pub struct ApiClient {
    base_url: String,
    session: Rc<SessionStore>,
    unauthorized: UnauthorizedHandler,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Rc<SessionStore>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            unauthorized: UnauthorizedHandler::new(session.clone(), navigator),
            session,
        }
    }

    /// Page-wide client bound to the global SessionStore
    pub fn global() -> Rc<ApiClient> {
        API_CLIENT.with(Rc::clone)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `Authorization` header value for the current session, if any
    pub fn authorization(&self) -> Option<String> {
        self.session.token().map(|token| format!("Bearer {}", token))
    }

    /// Map a response status to an error. A 401 triggers the logout/redirect.
    pub fn check_status(&self, status: u16, body: &str) -> Result<(), ApiError> {
        if (200..300).contains(&status) {
            return Ok(());
        }
        if status == 401 {
            self.unauthorized.handle();
        }
        Err(ApiError::from_response(status, body))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::error!("❌ HTTP {} on {}", status, response.url());
        self.check_status(status, &body).map(|()| response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::get(&self.url(path)))
            .query(query.iter().map(|(k, v)| (*k, v)))
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::decode(self.execute(request).await?).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::decode(self.execute(request).await?).await
    }

    /// POST without a body (favorites)
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::decode(self.execute(request).await?).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::decode(self.execute(request).await?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::delete(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::decode(self.execute(request).await?).await
    }

    /// Multipart POST; the browser sets the boundary header itself
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: web_sys::FormData,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::decode(self.execute(request).await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::stores::SecureStorage;
    use crate::utils::crypto::SessionCipher;
    use crate::utils::storage::MemoryKeyValueStore;

    #[derive(Default)]
    struct RecordingNavigator {
        visits: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn redirect(&self, path: &str) {
            self.visits.borrow_mut().push(path.to_string());
        }
    }

    fn client() -> (Rc<SessionStore>, Rc<RecordingNavigator>, ApiClient) {
        let storage = SecureStorage::new(
            Rc::new(MemoryKeyValueStore::new()),
            SessionCipher::new("test-key"),
        );
        let session = Rc::new(SessionStore::restore(storage, "auth-storage"));
        let navigator = Rc::new(RecordingNavigator::default());
        let client = ApiClient::new("http://api.test/", session.clone(), navigator.clone());
        (session, navigator, client)
    }

    fn count_logouts(session: &SessionStore) -> Rc<Cell<usize>> {
        let logouts = Rc::new(Cell::new(0));
        let counter = logouts.clone();
        session.subscribe(move |s| {
            if !s.is_authenticated {
                counter.set(counter.get() + 1);
            }
        });
        logouts
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let (_, _, client) = client();
        assert_eq!(client.url("/products/"), "http://api.test/products/");
    }

    #[test]
    fn test_authorization_reads_token_per_call() {
        let (session, _, client) = client();
        assert_eq!(client.authorization(), None);

        session.login("first", "alice", None).unwrap();
        assert_eq!(client.authorization().as_deref(), Some("Bearer first"));

        session.login("second", "alice", None).unwrap();
        assert_eq!(client.authorization().as_deref(), Some("Bearer second"));

        session.logout();
        assert_eq!(client.authorization(), None);
    }

    #[test]
    fn test_success_and_plain_errors_do_not_logout() {
        let (session, navigator, client) = client();
        session.login("tok", "alice", None).unwrap();

        assert!(client.check_status(200, "").is_ok());
        assert_eq!(
            client.check_status(400, r#"{"detail":"Product not found"}"#),
            Err(ApiError::Http {
                status: 400,
                detail: Some("Product not found".to_string())
            })
        );
        assert!(client.check_status(500, "").is_err());

        assert!(session.is_authenticated());
        assert!(navigator.visits.borrow().is_empty());
    }

    #[test]
    fn test_401_logs_out_and_redirects_once() {
        let (session, navigator, client) = client();
        session.login("tok", "alice", Some("admin")).unwrap();
        let logouts = count_logouts(&session);

        for _ in 0..5 {
            let err = client.check_status(401, "").unwrap_err();
            assert!(matches!(err, ApiError::Unauthorized { .. }));
        }

        assert!(!session.is_authenticated());
        assert_eq!(logouts.get(), 1);
        assert_eq!(*navigator.visits.borrow(), vec![LOGIN_PATH.to_string()]);
    }

    #[test]
    fn test_401_after_new_login_is_handled_again() {
        let (session, navigator, client) = client();
        session.login("tok", "alice", None).unwrap();
        let _ = client.check_status(401, "");

        session.login("tok2", "alice", None).unwrap();
        let _ = client.check_status(401, "");
        let _ = client.check_status(401, "");

        assert_eq!(navigator.visits.borrow().len(), 2);
        assert!(!session.is_authenticated());
    }
}
