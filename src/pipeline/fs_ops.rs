use std::fs;
use std::path::Path;

/// Creates `p` and any missing parents. An existing directory is not an error.
pub fn ensure_dir<P: AsRef<Path>>(p: P) -> std::io::Result<()> {
    if !p.as_ref().is_dir() {
        fs::create_dir_all(&p)?;
    }
    Ok(())
}
