use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::info;
use crate::utils::date;

/// Tell whether today's log exists: "Edit" when it does, "Enter" otherwise.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let loaded = RecordStore::new(cfg.store_path()).load()?;
    if loaded.is_missing() {
        info("No logs written yet.");
    }

    let today = date::today();
    let verb = if loaded.into_store().contains(&today) {
        "Edit"
    } else {
        "Enter"
    };

    println!("📝 {verb} Today Log ({today})");
    Ok(())
}
