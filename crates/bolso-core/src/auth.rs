//! Auth controller: orchestrates login/registration/logout and keeps the
//! persisted session flag consistent with what the server reports.
//!
//! The controller is an explicit handle (no global context): construct it
//! once and hand clones to whichever surface needs it. State machine:
//!
//! ```text
//! Unready -> {SignedOut, SignedIn}   on init() reading the persisted flag
//! SignedOut -> SignedIn              on successful sign_in/sign_up
//! SignedIn -> SignedOut              on sign_out or a failed probe
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::api::ApiClient;
use crate::messages;
use crate::session::SessionStore;

/// Markers of the unauthenticated landing page, used by the legacy probe.
const HOME_LOGIN_MARKER: &str = "Entrar";
const HOME_REGISTER_MARKER: &str = "Criar conta";

/// Cloneable authentication handle.
#[derive(Clone)]
pub struct AuthController {
    inner: Arc<Inner>,
}

struct Inner {
    client: ApiClient,
    store: SessionStore,
    ready: AtomicBool,
    signed_in: AtomicBool,
}

impl AuthController {
    pub fn new(client: ApiClient, store: SessionStore) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                store,
                ready: AtomicBool::new(false),
                signed_in: AtomicBool::new(false),
            }),
        }
    }

    /// Reads the persisted flag and leaves the Unready state.
    ///
    /// Must run before the navigation gate makes its first real decision.
    pub fn init(&self) {
        let signed_in = self.inner.store.get();
        self.inner.signed_in.store(signed_in, Ordering::SeqCst);
        self.inner.ready.store(true, Ordering::SeqCst);
    }

    pub fn ready(&self) -> bool {
        self.inner.ready.load(Ordering::SeqCst)
    }

    pub fn signed_in(&self) -> bool {
        self.inner.signed_in.load(Ordering::SeqCst)
    }

    pub fn client(&self) -> &ApiClient {
        &self.inner.client
    }

    /// Attempts login. Returns `None` on success, a user-facing message
    /// otherwise. Session state only changes on success.
    pub async fn sign_in(&self, email: &str, password: &str) -> Option<String> {
        match self.inner.client.login(email, password).await {
            Ok(true) => {
                self.mark_signed_in();
                None
            }
            Ok(false) => Some(messages::LOGIN_FAILED.to_string()),
            Err(err) => {
                tracing::warn!("login request failed: {err:#}");
                Some(messages::CONNECTION_ERROR.to_string())
            }
        }
    }

    /// Attempts registration. Same contract as [`Self::sign_in`].
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> Option<String> {
        match self.inner.client.register(name, email, password).await {
            Ok(true) => {
                self.mark_signed_in();
                None
            }
            Ok(false) => Some(messages::REGISTER_FAILED.to_string()),
            Err(err) => {
                tracing::warn!("register request failed: {err:#}");
                Some(messages::CONNECTION_ERROR.to_string())
            }
        }
    }

    /// Signs out. The logout call is best-effort: local state is cleared no
    /// matter what the server answers.
    pub async fn sign_out(&self) {
        match self.inner.client.logout().await {
            Ok(true) => {}
            Ok(false) => tracing::debug!("logout endpoint returned non-2xx"),
            Err(err) => tracing::debug!("logout request failed: {err:#}"),
        }
        self.force_signed_out();
    }

    /// Best-effort re-validation probe. Returns whether still signed in.
    ///
    /// `/api/session` is the source of truth. When that endpoint yields no
    /// data (absent, non-2xx, or non-JSON — indistinguishable here), the
    /// legacy heuristic sniffs the home document for unauthenticated-page
    /// markers. An unreachable server changes nothing: the flag tolerates
    /// staleness and only self-corrects on a contradicting response.
    pub async fn revalidate(&self) -> bool {
        if !self.signed_in() {
            return false;
        }

        match self.inner.client.session().await {
            Ok(Some(info)) => {
                if !info.authenticated {
                    tracing::info!("server no longer recognizes the session");
                    self.force_signed_out();
                }
            }
            Ok(None) => {
                if let Ok(html) = self.inner.client.fetch_home().await
                    && html.contains(HOME_LOGIN_MARKER)
                    && html.contains(HOME_REGISTER_MARKER)
                {
                    tracing::info!("home document shows the unauthenticated page");
                    self.force_signed_out();
                }
            }
            Err(err) => tracing::debug!("re-validation probe failed: {err:#}"),
        }

        self.signed_in()
    }

    fn mark_signed_in(&self) {
        self.inner.store.set_signed_in();
        self.inner.signed_in.store(true, Ordering::SeqCst);
    }

    fn force_signed_out(&self) {
        self.inner.store.clear();
        self.inner.signed_in.store(false, Ordering::SeqCst);
    }
}
