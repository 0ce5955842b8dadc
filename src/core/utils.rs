use std::fs;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Ensure directory exists.
pub fn ensure_dir(path: &Path) -> Result<(), String> {
    if !path.exists() {
        fs::create_dir_all(path)
            .map_err(|e| format!("Unable to create directory {}: {}", path.display(), e))?;
    }
    #[cfg(unix)]
    {
        fs::set_permissions(path, fs::Permissions::from_mode(0o700)).ok();
    }
    Ok(())
}

/// Restrict a data file to its owner.
pub fn restrict_file(path: &Path) {
    #[cfg(unix)]
    {
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).ok();
    }
    #[cfg(not(unix))]
    {
        let _ = path;
    }
}

/// Resolve the shelf home: explicit override, else `$HOME/.prompt-shelf`.
pub fn resolve_home(explicit: Option<&Path>) -> Result<std::path::PathBuf, String> {
    match explicit {
        Some(dir) => Ok(dir.to_path_buf()),
        None => {
            let home = std::env::var("HOME")
                .map_err(|_| "Unable to determine HOME directory".to_string())?;
            Ok(std::path::PathBuf::from(home).join(".prompt-shelf"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn explicit_home_wins() {
        let dir = Path::new("/tmp/shelf-home");
        assert_eq!(resolve_home(Some(dir)).unwrap(), dir);
    }
}
