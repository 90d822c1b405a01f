//! Web server command

use std::path::Path;

use anyhow::{anyhow, Result};
use tracing::warn;

use super::open_db;

pub async fn cmd_serve(db_path: &Path, host: &str, port: u16, static_dir: &Path) -> Result<()> {
    let db = open_db(db_path)?;

    let static_dir = if static_dir.is_dir() {
        Some(
            static_dir
                .to_str()
                .ok_or_else(|| anyhow!("Static directory path is not valid UTF-8"))?,
        )
    } else {
        warn!(
            "Static directory {} not found, serving API only",
            static_dir.display()
        );
        None
    };

    tally_server::serve(db, host, port, static_dir).await
}
