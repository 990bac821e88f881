//! Application use cases (business logic orchestration).

mod form_state;
mod load_session;
mod login;
mod logout;
mod signup;

#[cfg(test)]
mod test_support;

pub use form_state::FormState;
pub use load_session::LoadSession;
pub use login::{LOGIN_FAILED_MESSAGE, Login, login_failure_message};
pub use logout::Logout;
pub use signup::{SIGNUP_FAILED_MESSAGE, Signup, signup_failure_message};
