//! List command

use super::Context;

pub fn execute(ctx: &Context) -> anyhow::Result<()> {
    let service = ctx.open_service()?;
    let people = service.list_all()?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&people)?);
    } else {
        for person in &people {
            println!("{}", person.name);
        }
    }

    Ok(())
}
