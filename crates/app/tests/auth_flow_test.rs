//! Integration tests for the login, signup and logout flows
//!
//! These tests run the reqwest Auth Service client against a local axum
//! server and persist sessions through the file-based storage in a temp
//! directory, exercising the same wiring the binary uses.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::tempdir;
use url::Url;

use pathfinders_application::{
    AuthService, AuthServiceError, FlowError, LOGIN_FAILED_MESSAGE, LoadSession, Login, Logout,
    SIGNUP_FAILED_MESSAGE, SessionStore, Signup,
};
use pathfinders_domain::{FlowState, LoginForm, LoginRequest, Navigation, RegistrationForm};
use pathfinders_infrastructure::{FileStorage, ReqwestAuthService, TokioFileSystem};

type Sessions = SessionStore<FileStorage<TokioFileSystem>>;
type Received = Arc<Mutex<Vec<Value>>>;

/// Starts a fake backend and returns its API base URL plus the bodies it
/// received.
async fn spawn_backend() -> (Url, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));

    let login_log = Arc::clone(&received);
    let register_log = Arc::clone(&received);
    let router = Router::new()
        .route(
            "/api/auth/login/",
            post(move |Json(body): Json<Value>| {
                login_log.lock().unwrap().push(body.clone());
                async move { login_reply(&body) }
            }),
        )
        .route(
            "/api/auth/register/",
            post(move |Json(body): Json<Value>| {
                register_log.lock().unwrap().push(body.clone());
                async move { register_reply(&body) }
            }),
        );

    (serve(router).await, received)
}

fn login_reply(body: &Value) -> (StatusCode, Json<Value>) {
    if body["password"] == "x" {
        (
            StatusCode::OK,
            Json(json!({
                "access": "tok1",
                "refresh": "ref1",
                "username": "a",
                "role": "student",
                "first_name": "Ann",
                "last_name": "Lee",
            })),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Invalid credentials"})),
        )
    }
}

fn register_reply(body: &Value) -> (StatusCode, Json<Value>) {
    if body["email"] == "taken@b.com" {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "password": ["This password is too common."],
                "email": ["Email already exists"],
            })),
        )
    } else {
        (StatusCode::CREATED, Json(json!({"email": body["email"]})))
    }
}

async fn serve(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{addr}/api/")).unwrap()
}

fn client(base_url: Url) -> Arc<ReqwestAuthService> {
    Arc::new(ReqwestAuthService::new(base_url, Duration::from_secs(5)).unwrap())
}

fn sessions(dir: &Path) -> Sessions {
    SessionStore::new(FileStorage::new(
        TokioFileSystem::new(),
        dir.join("pathfinders").join("session.json"),
    ))
}

fn registration(email: &str) -> RegistrationForm {
    RegistrationForm {
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        email: email.to_string(),
        password: "hunter22".to_string(),
        confirm_password: "hunter22".to_string(),
        agree_terms: true,
    }
}

#[tokio::test]
async fn test_login_persists_session_across_restarts() {
    let (base_url, received) = spawn_backend().await;
    let dir = tempdir().unwrap();
    let login = Login::new(client(base_url), sessions(dir.path()));

    let navigation = login
        .submit(&LoginForm::new("a@b.com", "x"))
        .await
        .unwrap();
    assert_eq!(navigation, Navigation::Dashboard);

    // A fresh store over the same file sees the session
    let session = LoadSession::new(sessions(dir.path())).execute().await.unwrap();
    assert_eq!(session.token, "tok1");
    assert_eq!(session.profile.email, "a@b.com");
    assert_eq!(session.profile.username, "a");
    assert_eq!(session.profile.role, "student");
    assert_eq!(session.profile.display_name(), "Ann Lee");

    let sent = received.lock().unwrap().clone();
    assert_eq!(sent, vec![json!({"email": "a@b.com", "password": "x"})]);
}

#[tokio::test]
async fn test_rejected_login_shows_detail_and_writes_nothing() {
    let (base_url, _) = spawn_backend().await;
    let dir = tempdir().unwrap();
    let store = sessions(dir.path());
    let login = Login::new(client(base_url), store.clone());

    let error = login
        .submit(&LoginForm::new("a@b.com", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(error.message(), "Invalid credentials");
    assert_eq!(
        login.state().await,
        FlowState::failed("Invalid credentials")
    );
    assert_eq!(store.read().await, None);
    assert!(!store.storage().path().exists());
}

#[tokio::test]
async fn test_signup_sends_student_registration() {
    let (base_url, received) = spawn_backend().await;
    let signup = Signup::new(client(base_url));

    let navigation = signup.submit(&registration("new@b.com")).await.unwrap();

    assert_eq!(navigation, Navigation::Login);
    let sent = received.lock().unwrap().clone();
    assert_eq!(
        sent,
        vec![json!({
            "first_name": "Ann",
            "last_name": "Lee",
            "email": "new@b.com",
            "password": "hunter22",
            "password2": "hunter22",
            "role": "student",
        })]
    );
}

#[tokio::test]
async fn test_signup_email_error_takes_priority() {
    let (base_url, _) = spawn_backend().await;
    let signup = Signup::new(client(base_url));

    let error = signup.submit(&registration("taken@b.com")).await.unwrap_err();

    assert_eq!(error.message(), "Email: Email already exists");
}

#[tokio::test]
async fn test_signup_password_mismatch_never_reaches_server() {
    let (base_url, received) = spawn_backend().await;
    let signup = Signup::new(client(base_url));
    let form = RegistrationForm {
        confirm_password: "different".to_string(),
        ..registration("new@b.com")
    };

    let error = signup.submit(&form).await.unwrap_err();

    assert_eq!(error.message(), "Passwords do not match.");
    assert!(received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_logout_clears_session_and_is_idempotent() {
    let (base_url, _) = spawn_backend().await;
    let dir = tempdir().unwrap();
    let store = sessions(dir.path());
    Login::new(client(base_url), store.clone())
        .submit(&LoginForm::new("a@b.com", "x"))
        .await
        .unwrap();

    let logout = Logout::new(store.clone());
    assert_eq!(logout.execute().await.unwrap(), Navigation::Login);
    assert_eq!(logout.execute().await.unwrap(), Navigation::Login);

    assert_eq!(LoadSession::new(store.clone()).execute().await, None);
    assert!(!store.storage().path().exists());
}

#[tokio::test]
async fn test_corrupt_session_file_reads_as_logged_out() {
    let dir = tempdir().unwrap();
    let store = sessions(dir.path());
    let path = store.storage().path().to_path_buf();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{\"token\": ").unwrap();

    assert_eq!(LoadSession::new(store.clone()).execute().await, None);

    // Logging out repairs the file
    Logout::new(store).execute().await.unwrap();
    assert!(!path.exists());
}

#[tokio::test]
async fn test_token_without_profile_reads_as_logged_out() {
    let dir = tempdir().unwrap();
    let store = sessions(dir.path());
    let path = store.storage().path().to_path_buf();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"token": "tok1"}"#).unwrap();

    assert_eq!(store.read().await, None);
}

#[tokio::test]
async fn test_malformed_success_body_is_generic_failure() {
    let router = Router::new().route(
        "/api/auth/login/",
        post(|| async { (StatusCode::OK, "<html>maintenance</html>") }),
    );
    let base_url = serve(router).await;
    let dir = tempdir().unwrap();
    let store = sessions(dir.path());

    let service = client(base_url);
    let raw = service
        .login(&LoginRequest {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(raw, AuthServiceError::MalformedResponse(_)));

    let error = Login::new(service, store.clone())
        .submit(&LoginForm::new("a@b.com", "x"))
        .await
        .unwrap_err();
    assert_eq!(error.message(), LOGIN_FAILED_MESSAGE);
    assert_eq!(store.read().await, None);
}

#[tokio::test]
async fn test_server_error_without_fields_is_generic_signup_failure() {
    let router = Router::new().route(
        "/api/auth/register/",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Server Error (500)") }),
    );
    let base_url = serve(router).await;

    let error = Signup::new(client(base_url))
        .submit(&registration("new@b.com"))
        .await
        .unwrap_err();

    assert!(matches!(error, FlowError::Failed { .. }));
    assert_eq!(error.message(), SIGNUP_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let router = Router::new().route(
        "/api/auth/login/",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            StatusCode::OK
        }),
    );
    let base_url = serve(router).await;
    let service = ReqwestAuthService::new(base_url, Duration::from_millis(200)).unwrap();

    let error = service
        .login(&LoginRequest {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(error, AuthServiceError::Timeout { timeout_ms: 200 });
}
