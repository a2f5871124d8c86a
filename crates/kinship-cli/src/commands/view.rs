//! View command

use anyhow::bail;
use clap::Args;
use kinship_core::PersonRef;

use super::Context;

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Name of the person
    pub name: String,
}

pub fn execute(ctx: &Context, args: ViewArgs) -> anyhow::Result<()> {
    let service = ctx.open_service()?;
    let Some(view) = service.find_person(&args.name)? else {
        bail!("Person not found: {}", args.name.trim());
    };

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{} ({})", view.name, view.id);
        println!("  parents: {}", join_names(&view.parents));
        println!("  children: {}", join_names(&view.children));
    }

    Ok(())
}

fn join_names(people: &[PersonRef]) -> String {
    if people.is_empty() {
        return "-".to_string();
    }
    people
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
