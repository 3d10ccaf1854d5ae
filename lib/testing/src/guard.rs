use std::path::{Path, PathBuf};
use std::{env, io};

/// Switches the process working directory until dropped. Tests using it must be serialized.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new<P: AsRef<Path>>(new_dir: P) -> io::Result<Self> {
        let original_dir = env::current_dir()?;
        env::set_current_dir(&new_dir)?;
        Ok(Self { original_dir })
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original_dir);
    }
}
