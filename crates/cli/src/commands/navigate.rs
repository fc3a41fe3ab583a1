// Guarded navigation and the role menu

use anyhow::Result;

use comptoir_client::{NavOutcome, Router};
use comptoir_core::navigation_for;
use comptoir_session::SessionStore;

use crate::output::OutputFormat;

pub async fn open(router: &Router, route: &str) -> Result<()> {
    match router.open(route).await {
        NavOutcome::Moved => println!("Moved to {}", router.current_route()),
        NavOutcome::RedirectedToLogin => println!("Redirected to /login"),
        NavOutcome::Superseded => println!("Navigation superseded"),
    }
    Ok(())
}

pub fn nav(session: &SessionStore, format: OutputFormat) -> Result<()> {
    session.restore_user();
    let role = session.user().map(|u| u.role_tier()).unwrap_or_default();
    let menu = navigation_for(role);

    format.print_value(&menu)?;

    if format.is_text() {
        for (i, group) in menu.iter().enumerate() {
            if i > 0 {
                println!();
            }
            for item in group.iter() {
                if item.link.is_empty() {
                    println!("{}", item.name);
                } else {
                    println!("{:<22} {}", item.name, item.link);
                }
            }
        }
    }
    Ok(())
}
