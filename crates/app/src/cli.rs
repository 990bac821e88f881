//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pathfinders_domain::{LoginForm, RegistrationForm};
use pathfinders_infrastructure::ConfigOverrides;

#[derive(Parser, Debug)]
#[command(
    name = "pathfinders",
    version,
    about = "Log in to PathFinders and view your student profile"
)]
pub struct Cli {
    /// Base URL of the backend API [env: PATHFINDERS_API_URL]
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds [env: PATHFINDERS_TIMEOUT_SECS]
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Where the session is stored [env: PATHFINDERS_SESSION_FILE]
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_url: self.api_url.clone(),
            timeout_secs: self.timeout_secs,
            session_file: self.session_file.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session
    Login(LoginArgs),
    /// Create a student account
    Signup(SignupArgs),
    /// Forget the stored session
    Logout,
    /// Show the stored profile
    Profile,
    /// Show the dashboard greeting
    Dashboard,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long, env = "PATHFINDERS_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl LoginArgs {
    pub fn into_form(self) -> LoginForm {
        LoginForm::new(self.email, self.password)
    }
}

#[derive(Args, Debug)]
pub struct SignupArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long, env = "PATHFINDERS_PASSWORD", hide_env_values = true)]
    pub password: String,

    #[arg(long)]
    pub confirm_password: String,

    /// Accept the terms and conditions
    #[arg(long)]
    pub agree_terms: bool,
}

impl SignupArgs {
    pub fn into_form(self) -> RegistrationForm {
        RegistrationForm {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            confirm_password: self.confirm_password,
            agree_terms: self.agree_terms,
        }
    }
}
