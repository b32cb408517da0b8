use cirrus_application::AppContext;
use cirrus_core::Result;
use cirrus_core::auth::Role;
use cirrus_core::config::AuthMode;
use colored::Colorize;

/// Admin-only configuration summary. Secrets are summarized by presence,
/// never printed.
pub fn run(ctx: &AppContext) -> Result<()> {
    let session = ctx.auth.authorize(Role::Admin)?;

    println!("{} (admin: {})", "Configuration".bold(), session.user_id);
    println!(
        "  weather mode: {}",
        if ctx.config.is_mock_mode() {
            "mock (no API key configured)".yellow()
        } else {
            "live (API key configured)".green()
        }
    );
    println!(
        "  auth mode:    {}",
        match ctx.config.auth_mode {
            AuthMode::Open => "open (any non-empty credentials)",
            AuthMode::Roster => "roster",
        }
    );
    println!("  roster users: {}", ctx.config.auth_users.len());
    Ok(())
}
