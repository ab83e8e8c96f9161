//! Download-and-save: validate the destination, fetch the body, persist it
//! atomically. The network fetch itself lives in [`crate::fetch`].

use std::path::PathBuf;

use tracing::info;

use super::{atomic, validate};
use crate::errors::OpResult;
use crate::fetch;

/// Fetch `url` (optionally through `proxy`) and write the full body as
/// `file_name` inside `dir_raw`, overwriting any existing file of that name.
/// Returns the path the payload was saved at.
pub fn download_and_save(
    url: &str,
    file_name: &str,
    dir_raw: &str,
    proxy: Option<&str>,
) -> OpResult<PathBuf> {
    let name = validate::non_blank(file_name)?;
    let dir = validate::non_blank(dir_raw)?;
    validate::existing_dir(dir)?;

    let bytes = fetch::fetch(url, proxy)?;
    let dest = dir.join(name);
    atomic::write_atomic(&dest, &bytes)?;
    info!(url, dest = %dest.display(), bytes = bytes.len(), "downloaded and saved");
    Ok(dest)
}
