//! Add command

use clap::Args;

use super::Context;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Name of the person
    pub name: String,

    /// Parent name (repeatable)
    #[arg(long = "parent", short = 'p')]
    pub parents: Vec<String>,

    /// Child name (repeatable)
    #[arg(long = "child", short = 'c')]
    pub children: Vec<String>,
}

pub fn execute(ctx: &Context, args: AddArgs) -> anyhow::Result<()> {
    let mut service = ctx.open_service()?;
    let person = service.add_person(&args.name, &args.parents, &args.children)?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&person)?);
    } else {
        println!("Person added successfully!");
        println!("  id: {}", person.id);
        println!("  name: {}", person.name);
        println!("  parents: {}", person.parents.len());
        println!("  children: {}", person.children.len());
    }

    Ok(())
}
