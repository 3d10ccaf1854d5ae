use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{DevconvertStdError, DevconvertStdResult};

/// Creates `path` and any missing parents. An existing directory is not an error.
pub fn ensure_dir(path: &Path) -> DevconvertStdResult<()> {
    match fs::create_dir_all(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("the directory {} already exists", path.to_string_lossy());
            Ok(())
        }
        Err(e) => {
            debug!(
                "Error occurred creating directory {}: {}",
                path.to_string_lossy(),
                e
            );
            Err(e.into())
        }
    }
}

/// Writes `contents` to `path` through a temporary file in the same directory which is then
/// renamed over the destination. Readers either see the previous file or the complete new one.
pub fn write_atomic<P, C>(path: P, contents: C) -> DevconvertStdResult<()>
where
    P: AsRef<Path>,
    C: AsRef<[u8]>,
{
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        Some(_) => Path::new("."),
        None => return Err(DevconvertStdError::MissingParent(path.to_path_buf())),
    };

    ensure_dir(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(contents.as_ref())?;
    file.as_file().sync_all()?;
    file.persist(path)
        .map_err(|source| DevconvertStdError::PersistError {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("wrote {}", path.to_string_lossy());
    Ok(())
}
