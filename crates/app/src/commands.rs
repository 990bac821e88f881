//! Wires the flows to real adapters and runs one command.

use std::sync::Arc;

use pathfinders_application::{
    AuthServiceError, FlowError, LoadSession, Login, Logout, SessionStore, Signup, StorageError,
};
use pathfinders_domain::Navigation;
use pathfinders_infrastructure::{
    ClientConfig, ConfigError, FileStorage, ReqwestAuthService, TokioFileSystem,
};
use thiserror::Error;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::render;

type Sessions = SessionStore<FileStorage<TokioFileSystem>>;

/// Why a command exited unsuccessfully.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("could not create HTTP client: {0}")]
    Client(#[from] AuthServiceError),

    #[error("{0}")]
    Flow(#[from] FlowError),

    #[error("could not clear session: {0}")]
    Storage(#[from] StorageError),
}

/// Runs `cli` and returns the text to print on success.
pub async fn run(cli: Cli) -> Result<String, CommandError> {
    let config = ClientConfig::resolve(cli.overrides())?;
    debug!(
        api = %config.api_base_url,
        session_file = %config.session_file.display(),
        "configuration resolved"
    );
    let sessions = session_store(&config);

    match cli.command {
        Command::Login(args) => {
            let login = Login::new(auth_service(&config)?, sessions.clone());
            let navigation = login.submit(&args.into_form()).await?;
            Ok(navigate(navigation, &sessions).await)
        }
        Command::Signup(args) => {
            let form = args.into_form();
            let signup = Signup::new(auth_service(&config)?);
            match signup.submit(&form).await? {
                Navigation::Login => Ok(render::signed_up(&form.email)),
                other => Ok(navigate(other, &sessions).await),
            }
        }
        Command::Logout => {
            Logout::new(sessions).execute().await?;
            Ok("Logged out.".to_string())
        }
        Command::Profile => {
            let session = LoadSession::new(sessions).execute().await;
            Ok(render::profile(session.as_ref()))
        }
        Command::Dashboard => Ok(navigate(Navigation::Dashboard, &sessions).await),
    }
}

fn session_store(config: &ClientConfig) -> Sessions {
    SessionStore::new(FileStorage::new(
        TokioFileSystem::new(),
        config.session_file.clone(),
    ))
}

fn auth_service(config: &ClientConfig) -> Result<Arc<ReqwestAuthService>, AuthServiceError> {
    ReqwestAuthService::new(config.api_base_url.clone(), config.request_timeout).map(Arc::new)
}

/// Renders the view a flow navigated to.
async fn navigate(navigation: Navigation, sessions: &Sessions) -> String {
    match navigation {
        Navigation::Dashboard => {
            let session = LoadSession::new(sessions.clone()).execute().await;
            render::dashboard(session.as_ref())
        }
        Navigation::Login => render::NOT_LOGGED_IN.to_string(),
    }
}
