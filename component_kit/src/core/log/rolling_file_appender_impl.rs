// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// Creates a daily rolling file appender. `path_str` is the folder and file name prefix
/// to use, eg: `/tmp/component_kit_log.txt` or `component_kit_log.txt`. A bare file name
/// is placed in the current folder.
///
/// # Errors
///
/// Returns an error if `path_str` has no file name component.
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::daily(parent, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_path_without_file_name() {
        assert!(try_create("/").is_err());
    }

    #[test]
    fn test_creates_appender_in_folder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fields.log");
        assert!(try_create(path.to_str().unwrap()).is_ok());
    }
}
