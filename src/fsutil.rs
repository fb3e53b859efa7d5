use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

fn parent_dir(dest: &Path) -> io::Result<&Path> {
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.exists() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(parent)
}

/// Create an empty temp file next to `dest`, keeping `dest`'s extension so
/// extension-sensitive writers behave the same.
///
/// # Errors
/// Returns an error if the parent directory or temp file cannot be created.
pub fn temp_sibling(dest: &Path) -> io::Result<NamedTempFile> {
    let parent = parent_dir(dest)?;
    let suffix = dest.extension().and_then(|e| e.to_str()).map(|e| format!(".{e}")).unwrap_or_default();
    Builder::new().prefix(".benchcurve-").suffix(&suffix).tempfile_in(parent)
}

/// Move a finished temp file over `dest`. The rename replaces an existing
/// `dest` in one step; only after a failed rename (a destination held open
/// on some platforms) is `dest` removed before retrying.
///
/// # Errors
/// Returns the last persist error when all attempts fail.
pub fn persist(mut tmp: NamedTempFile, dest: &Path) -> io::Result<()> {
    let mut last_err: Option<io::Error> = None;
    for attempt in 0..5 {
        if last_err.is_some()
            && dest.exists()
            && let Err(e) = std::fs::remove_file(dest)
        {
            last_err = Some(e);
            std::thread::sleep(std::time::Duration::from_millis(10 + attempt * 5));
            continue;
        }
        match tmp.persist(dest) {
            Ok(_) => return Ok(()),
            Err(pe) => {
                last_err = Some(pe.error);
                tmp = pe.file;
                std::thread::sleep(std::time::Duration::from_millis(10 + attempt * 5));
            }
        }
    }
    Err(last_err.unwrap_or_else(|| io::Error::other(format!("failed to persist {}", dest.display()))))
}

/// Write `dest` atomically: `write` fills a temp file in the same directory,
/// which then replaces `dest`.
///
/// # Errors
/// Returns an error if the temp file cannot be created, `write` fails, or the persist fails.
pub fn write_atomically<F, E>(dest: &Path, write: F) -> Result<(), E>
where
    F: FnOnce(&mut dyn Write) -> Result<(), E>,
    E: From<io::Error>,
{
    let mut tmp = temp_sibling(dest)?;
    {
        let mut w = BufWriter::new(tmp.as_file_mut());
        write(&mut w)?;
        w.flush()?;
    }
    persist(tmp, dest)?;
    Ok(())
}
