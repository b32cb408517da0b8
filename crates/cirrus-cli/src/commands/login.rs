use super::prompt;
use cirrus_application::AppContext;
use cirrus_core::Result;
use cirrus_core::auth::Credentials;
use colored::Colorize;

pub fn run(ctx: &AppContext, user: Option<String>, password: Option<String>) -> Result<()> {
    let identifier = match user {
        Some(user) => user,
        None => prompt("Email/Username: ")?,
    };
    let password = match password {
        Some(password) => password,
        None => prompt("Password: ")?,
    };

    let session = ctx.auth.login(&Credentials::new(identifier, password))?;

    println!(
        "{} {} ({})",
        "Logged in as".green(),
        session.user_id.bold(),
        session.role
    );
    println!(
        "Session expires {}",
        session
            .expiry
            .format("%Y-%m-%d %H:%M UTC")
            .to_string()
            .dimmed()
    );
    Ok(())
}
