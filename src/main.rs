mod metrics;
mod models;
mod run;
mod session;
mod store;
mod ui;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let db_path = get_db_path()?;
    let mut store = store::Store::open(&db_path)?;
    let session = session::Session::resume_or_create(&mut store)?;

    if args.len() > 1 {
        run::as_cli(&args, &mut store, &session)
    } else {
        run::as_tui(&mut store, &session)
    }
}

fn get_db_path() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "findash", "FinDash")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("findash.db"))
}
