//! Persist rendered suites and read suite files back as lines.
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Replace `path` with the rendered lines, each terminated by `\n`.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create parent dir {}", parent.display()))?;
    }
    fs::write(path, join_lines(lines).as_bytes())
        .with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), lines = lines.len(), "wrote suite file");
    Ok(())
}

/// Write to a new, persisted `<prefix>XXXXXX.html` in the system temp dir.
pub fn write_temp_html(prefix: &str, lines: &[String]) -> Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(".html")
        .tempfile()
        .with_context(|| format!("create temp file with prefix {prefix}"))?;
    file.write_all(join_lines(lines).as_bytes())
        .with_context(|| format!("write {}", file.path().display()))?;
    let (_, path) = file
        .keep()
        .with_context(|| format!("persist temp file with prefix {prefix}"))?;
    tracing::info!(path = %path.display(), lines = lines.len(), "wrote suite temp file");
    Ok(path)
}

pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(text.lines().map(str::to_string).collect())
}

fn join_lines(lines: &[String]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_replaces_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/suite.html");
        write_lines(&path, &["old".to_string(), "content".to_string()]).expect("first write");
        write_lines(&path, &["<body>".to_string()]).expect("second write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "<body>\n");
        assert_eq!(read_lines(&path).expect("read lines"), vec!["<body>"]);
    }

    #[test]
    fn temp_html_uses_prefix_and_extension() {
        let path = write_temp_html("Search_GEN", &["</html>".to_string()]).expect("temp write");
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .expect("utf-8 name")
            .to_string();
        assert!(file_name.starts_with("Search_GEN"));
        assert!(file_name.ends_with(".html"));
        assert_eq!(read_lines(&path).expect("read"), vec!["</html>"]);
        fs::remove_file(&path).expect("cleanup");
    }

    #[test]
    fn read_error_names_path() {
        let err = read_lines(Path::new("/nonexistent/suite.html")).expect_err("missing");
        assert!(err.to_string().contains("/nonexistent/suite.html"));
    }
}
