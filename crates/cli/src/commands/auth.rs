// Login, logout, and session inspection

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use comptoir_client::ApiClient;
use comptoir_core::UserProfile;
use comptoir_session::SessionStore;

use crate::output::{print_field, OutputFormat};

fn prompt_password() -> Result<String> {
    eprint!("Password: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}

pub async fn login(
    client: &ApiClient,
    username: &str,
    password: Option<String>,
    quiet: bool,
) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => prompt_password()?,
    };

    comptoir_client::login(client, username, &password)
        .await
        .context("login failed")?;

    if !quiet {
        println!("Logged in as {username}");
    }
    Ok(())
}

pub fn logout(session: &SessionStore, quiet: bool) -> Result<()> {
    session.logout();
    if !quiet {
        println!("Logged out");
    }
    Ok(())
}

/// Stored session as shown by `whoami`
#[derive(Serialize)]
struct SessionView {
    logged_in: bool,
    user: Option<UserProfile>,
}

pub fn whoami(session: &SessionStore, format: OutputFormat) -> Result<()> {
    session.restore_user();
    let view = SessionView {
        logged_in: session.token().is_some(),
        user: session.user(),
    };
    format.print_value(&view)?;

    if format.is_text() {
        match (&view.user, view.logged_in) {
            (Some(user), _) => {
                print_field("Username", &user.username);
                print_field("Id", &user.id.to_string());
                if let Some(email) = &user.email {
                    print_field("Email", email);
                }
                print_field("Role", user.role.as_deref().unwrap_or("staff"));
                print_field("Session", if view.logged_in { "active" } else { "expired" });
            }
            (None, true) => println!("Logged in (no stored profile)"),
            (None, false) => println!("Not logged in"),
        }
    }
    Ok(())
}
