use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use tracing::{debug, trace};

/// True when `path` exists and the current process can both read and write it.
///
/// Any access error, including "not found", is reported as `false`.
#[cfg(unix)]
pub fn exists(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: `c_path` is NUL-terminated and outlives the call.
    unsafe { libc::access(c_path.as_ptr(), libc::F_OK | libc::R_OK | libc::W_OK) == 0 }
}

#[cfg(not(unix))]
pub fn exists(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| !meta.permissions().readonly())
        .unwrap_or(false)
}

/// Creates every missing level of `dir`, shortest prefix first.
///
/// Returns how many directories were created; zero when the whole path already exists.
pub fn ensure_dir(dir: &Path) -> anyhow::Result<usize> {
    let mut current = PathBuf::new();
    let mut created = 0;

    for component in normalize(dir).components() {
        current.push(component);
        if !matches!(component, Component::Normal(_)) {
            continue;
        }
        if exists(&current) {
            continue;
        }
        match fs::create_dir(&current) {
            Ok(()) => {
                debug!(path = %current.display(), "created directory");
                created += 1;
            }
            // Present but not readable/writable for us; nothing to create at this level.
            Err(e) if e.kind() == ErrorKind::AlreadyExists && current.is_dir() => {
                trace!(path = %current.display(), "directory already present");
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to create directory {}", current.display()));
            }
        }
    }

    Ok(created)
}

// Lexical normalization: drops `.` segments and folds `x/..` pairs without touching the disk.
fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().collect()
}
