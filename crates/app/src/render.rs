//! Plain-text views of the stored session.

use pathfinders_domain::Session;

pub const NOT_LOGGED_IN: &str = "Not logged in.";

/// Profile card: name, username when present, email and role.
pub fn profile(session: Option<&Session>) -> String {
    let Some(session) = session else {
        return NOT_LOGGED_IN.to_string();
    };
    let profile = &session.profile;

    let username = profile
        .username()
        .map(|username| format!("Username: {username}\n"))
        .unwrap_or_default();
    format!(
        "Name: {}\n{username}Email: {}\nRole: {}",
        profile.display_name(),
        profile.email,
        profile.role
    )
}

pub fn dashboard(session: Option<&Session>) -> String {
    session.map_or_else(
        || NOT_LOGGED_IN.to_string(),
        |session| {
            format!(
                "PATHFINDER | {}\nWelcome back, {}!",
                session.profile.display_name(),
                session.profile.first_name
            )
        },
    )
}

pub fn signed_up(email: &str) -> String {
    format!("Account created. Log in with: pathfinders login --email {email}")
}
