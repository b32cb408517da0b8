use cirrus_application::AppContext;
use cirrus_core::Result;
use cirrus_core::audit::AuditOutcome;
use colored::Colorize;

pub fn show(ctx: &AppContext) -> Result<()> {
    let entries = ctx.audit.entries();
    if entries.is_empty() {
        println!("{}", "Audit log is empty.".dimmed());
        return Ok(());
    }

    for entry in &entries {
        let outcome = match entry.outcome {
            AuditOutcome::Success => entry.outcome.to_string().green(),
            AuditOutcome::Error => entry.outcome.to_string().red(),
        };
        print!(
            "{}  {:<11} {}",
            entry.timestamp.dimmed(),
            entry.action.to_string(),
            outcome
        );
        if let Some(query) = &entry.query {
            print!("  query={query}");
        }
        if let Some(message) = &entry.message {
            print!("  {message}");
        }
        println!();
    }
    println!("{} entries", entries.len());
    Ok(())
}

pub fn clear(ctx: &AppContext) -> Result<()> {
    ctx.audit.clear();
    println!("{}", "Audit log cleared.".green());
    Ok(())
}
