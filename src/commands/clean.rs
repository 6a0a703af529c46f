//! Clean the output directory

use anyhow::Result;

use crate::generator::remove_dir;
use crate::Site;

/// Delete the output directory if it exists
pub fn run(site: &Site) -> Result<()> {
    if site.public_dir.exists() {
        remove_dir(&site.public_dir)?;
        tracing::info!("Deleted: {:?}", site.public_dir);
    }

    Ok(())
}
