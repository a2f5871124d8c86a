pub mod add;
pub mod check;
pub mod delete;
pub mod list;
pub mod view;

use std::path::PathBuf;

use anyhow::Context as _;
use kinship_engine::PersonGraphService;
use kinship_store::SqliteStore;

/// Options shared by every subcommand
#[derive(Debug, Clone)]
pub struct Context {
    pub db: PathBuf,
    pub json: bool,
}

impl Context {
    pub fn open_service(&self) -> anyhow::Result<PersonGraphService<SqliteStore>> {
        PersonGraphService::open_sqlite(&self.db)
            .with_context(|| format!("opening store at {}", self.db.display()))
    }
}
