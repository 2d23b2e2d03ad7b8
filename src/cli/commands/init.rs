use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - an empty JSON store, unless one already exists
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing sugarlog…");

    if !cli.test {
        let path = cfg.write()?;
        println!("📄 Config file : {}", path.display());
    }

    let store = RecordStore::new(cfg.store_path());
    println!("🗄️  Store       : {}", store.path().display());

    let loaded = store.load()?;
    if loaded.is_missing() {
        store.save(&loaded.into_store())?;
        success(format!("Empty store created at {}", store.path().display()));
    } else {
        info("Existing store kept untouched.");
    }

    LogLogic::record(
        cfg,
        "init",
        &store.path().to_string_lossy(),
        "sugarlog initialized",
    );

    success("sugarlog initialization completed!");
    Ok(())
}
