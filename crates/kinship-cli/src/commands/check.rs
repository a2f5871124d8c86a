//! Integrity check command

use anyhow::bail;

use super::Context;

pub fn execute(ctx: &Context) -> anyhow::Result<()> {
    let service = ctx.open_service()?;
    let violations = service.check_integrity()?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&violations)?);
    } else if violations.is_empty() {
        println!("Graph is consistent");
    } else {
        for violation in &violations {
            println!("{}", violation);
        }
    }

    if !violations.is_empty() {
        bail!("{} integrity violation(s) found", violations.len());
    }
    Ok(())
}
