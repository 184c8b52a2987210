use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a walk file into a vector of lines.
///
/// The whole file is loaded up front; parsing and calculation never touch
/// the filesystem. A missing or unreadable file is an error for the caller
/// to report, not a panic.
pub fn read_walk_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read walk file {}", path.display()))?;
    Ok(content.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_lines() {
        let mut file = tempfile();
        writeln!(file.1, ".1.3.6.1.2.1.1.3.0 = Timeticks: 1000").unwrap();
        writeln!(file.1, ".1.3.6.1.2.1.2.2.1.2.1 = STRING: \"lo\"").unwrap();
        let lines = read_walk_file(&file.0).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(".1.3.6.1.2.1.1.3.0"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_walk_file(Path::new("no-such-walk.txt")).unwrap_err();
        assert!(err.to_string().contains("no-such-walk.txt"));
    }

    fn tempfile() -> (std::path::PathBuf, fs::File) {
        let path = std::env::temp_dir().join(format!(
            "snmputil-reader-test-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let file = fs::File::create(&path).unwrap();
        (path, file)
    }
}
