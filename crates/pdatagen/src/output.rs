//! Writing generated files to disk and detecting stale ones.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::generator::GeneratedFile;

/// Writes every file into `out_dir`, creating the directory if needed.
pub fn write_files(out_dir: &Path, files: &[GeneratedFile]) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = out_dir.join(&file.file_name);
        fs::write(&path, &file.contents)?;
        written.push(path);
    }
    Ok(written)
}

/// Returns the paths whose contents differ from `files`, including missing ones.
pub fn stale_files(out_dir: &Path, files: &[GeneratedFile]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|file| (out_dir.join(&file.file_name), file))
        .filter(|(path, file)| {
            fs::read_to_string(path).map_or(true, |existing| existing != file.contents)
        })
        .map(|(path, _)| path)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use crate::schemas::telemetry;

    #[test]
    fn test_written_files_are_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let files = generate(&telemetry()).unwrap();

        let written = write_files(dir.path(), &files).unwrap();

        assert_eq!(written.len(), files.len());
        assert!(stale_files(dir.path(), &files).is_empty());
    }

    #[test]
    fn test_missing_and_edited_files_are_stale() {
        let dir = tempfile::tempdir().unwrap();
        let files = generate(&telemetry()).unwrap();
        write_files(dir.path(), &files).unwrap();

        fs::remove_file(dir.path().join("generated_logs.rs")).unwrap();
        fs::write(dir.path().join("generated_trace.rs"), "// edited\n").unwrap();

        let stale = stale_files(dir.path(), &files);
        assert_eq!(
            stale,
            vec![
                dir.path().join("generated_trace.rs"),
                dir.path().join("generated_logs.rs"),
            ]
        );
    }
}
