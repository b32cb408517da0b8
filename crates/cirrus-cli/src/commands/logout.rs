use cirrus_application::AppContext;
use cirrus_core::Result;
use colored::Colorize;

pub fn run(ctx: &AppContext) -> Result<()> {
    ctx.auth.logout();
    println!("{}", "Logged out.".green());
    Ok(())
}
