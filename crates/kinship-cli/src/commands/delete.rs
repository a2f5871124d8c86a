//! Delete command

use clap::Args;

use super::Context;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Name of the person
    pub name: String,
}

pub fn execute(ctx: &Context, args: DeleteArgs) -> anyhow::Result<()> {
    let mut service = ctx.open_service()?;
    let person = service.delete_person(&args.name)?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&person)?);
    } else {
        println!("{} has been deleted successfully", person.name);
    }

    Ok(())
}
