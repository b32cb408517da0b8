use cirrus_application::AppContext;
use cirrus_core::Result;
use colored::Colorize;

pub fn run(ctx: &AppContext) -> Result<()> {
    match ctx.auth.current_session() {
        Some(session) => {
            println!("{} ({})", session.user_id.bold(), session.role);
            if let Some(email) = &session.email {
                println!("email: {email}");
            }
            println!(
                "session valid until {}",
                session.expiry.format("%Y-%m-%d %H:%M UTC")
            );
        }
        None => println!("{}", "Not logged in.".yellow()),
    }
    Ok(())
}
