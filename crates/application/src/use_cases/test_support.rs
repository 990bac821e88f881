//! Test doubles shared by the use case tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pathfinders_domain::{LoginRequest, LoginResponse, RegisterRequest};
use tokio::sync::{Mutex, Notify};

use crate::ports::{AuthService, AuthServiceError};

/// Auth Service returning canned results and recording what it was sent.
pub struct StubAuthService {
    login_result: Result<LoginResponse, AuthServiceError>,
    register_result: Result<(), AuthServiceError>,
    calls: AtomicUsize,
    last_login: Mutex<Option<LoginRequest>>,
    last_register: Mutex<Option<RegisterRequest>>,
    gate: Option<Arc<Notify>>,
}

impl StubAuthService {
    pub fn login_ok(response: LoginResponse) -> Self {
        Self::new(Ok(response), Ok(()))
    }

    pub fn login_err(error: AuthServiceError) -> Self {
        Self::new(Err(error), Ok(()))
    }

    pub fn register_ok() -> Self {
        Self::new(Err(AuthServiceError::Transport("unused".into())), Ok(()))
    }

    pub fn register_err(error: AuthServiceError) -> Self {
        Self::new(Err(AuthServiceError::Transport("unused".into())), Err(error))
    }

    fn new(
        login_result: Result<LoginResponse, AuthServiceError>,
        register_result: Result<(), AuthServiceError>,
    ) -> Self {
        Self {
            login_result,
            register_result,
            calls: AtomicUsize::new(0),
            last_login: Mutex::new(None),
            last_register: Mutex::new(None),
            gate: None,
        }
    }

    /// Holds every response until `gate` is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn last_login(&self) -> Option<LoginRequest> {
        self.last_login.lock().await.clone()
    }

    pub async fn last_register(&self) -> Option<RegisterRequest> {
        self.last_register.lock().await.clone()
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

impl AuthService for StubAuthService {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_login.lock().await = Some(request.clone());
        self.wait_for_gate().await;
        self.login_result.clone()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), AuthServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_register.lock().await = Some(request.clone());
        self.wait_for_gate().await;
        self.register_result.clone()
    }
}

pub fn ann_response() -> LoginResponse {
    LoginResponse {
        access: "tok1".to_string(),
        refresh: None,
        username: "a".to_string(),
        role: "student".to_string(),
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
    }
}

pub fn rejected(status: u16, body: serde_json::Value) -> AuthServiceError {
    AuthServiceError::Rejected {
        status,
        body: body.into(),
    }
}
