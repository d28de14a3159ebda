//! Filesystem access
//!
//! The walker and emitter only see this trait, which keeps traversal and
//! output ordering testable without touching disk.

use crate::core::error::{DigestError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// How `write_text` treats existing content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Truncate,
    Append,
}

/// Directory listing and text I/O
#[cfg_attr(test, automock)]
pub trait FileSystem {
    /// List the entries of one directory, in no particular order
    fn list_entries(&self, dir: &Path) -> Result<Vec<DirEntry>>;

    /// Read a file as text
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Write `content`, truncating or appending
    fn write_text(&self, path: &Path, content: &str, mode: WriteMode) -> Result<()>;
}

/// `FileSystem` backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl OsFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for OsFileSystem {
    fn list_entries(&self, dir: &Path) -> Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            // Follows symlinks; dangling links and special files are dropped.
            let is_dir = path.is_dir();
            if !is_dir && !path.is_file() {
                continue;
            }
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        Ok(entries)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)?;
        if is_binary(&bytes) {
            return Err(DigestError::Binary {
                path: path.to_path_buf(),
            });
        }
        read_file_content(&bytes).ok_or_else(|| DigestError::Binary {
            path: path.to_path_buf(),
        })
    }

    fn write_text(&self, path: &Path, content: &str, mode: WriteMode) -> Result<()> {
        let mut file = match mode {
            WriteMode::Truncate => OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)?,
            WriteMode::Append => OpenOptions::new().append(true).create(true).open(path)?,
        };
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}

/// Check if content appears to be binary
pub fn is_binary(content: &[u8]) -> bool {
    // Check first 8KB for null bytes
    let check_len = content.len().min(8192);
    content[..check_len].contains(&0)
}

/// Decode file content, normalising line endings
pub fn read_file_content(bytes: &[u8]) -> Option<String> {
    if let Ok(s) = std::str::from_utf8(bytes) {
        return Some(s.replace("\r\n", "\n"));
    }

    // Lossy conversion, unless it is mostly replacement characters
    let s = String::from_utf8_lossy(bytes);
    if s.chars().filter(|c| *c == '\u{FFFD}').count() < s.len() / 10 {
        Some(s.replace("\r\n", "\n"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_binary() {
        assert!(!is_binary(b""));
        assert!(!is_binary(b"class A {}"));
        assert!(is_binary(b"class\x00A"));
    }

    #[test]
    fn test_read_file_content_normalises_crlf() {
        assert_eq!(
            read_file_content(b"a;\r\nb;\r\n").as_deref(),
            Some("a;\nb;\n")
        );
    }

    #[test]
    fn test_read_file_content_lossy_latin1() {
        // One stray Latin-1 byte in otherwise ASCII text
        let mut bytes = b"// caf".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b"\nclass A {}\n");
        let text = read_file_content(&bytes).unwrap();
        assert!(text.contains("class A {}"));
    }

    #[test]
    fn test_list_entries_reports_kinds() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("pkg")).unwrap();
        std::fs::write(temp.path().join("A.java"), "class A {}").unwrap();

        let mut entries = OsFileSystem::new().list_entries(temp.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(entries, vec![DirEntry::file("A.java"), DirEntry::dir("pkg")]);
    }

    #[test]
    fn test_list_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        let err = OsFileSystem::new()
            .list_entries(&temp.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, DigestError::Io(_)));
    }

    #[test]
    fn test_read_text_rejects_binary() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Blob.java");
        std::fs::write(&path, b"\x00\x01\x02").unwrap();
        let err = OsFileSystem::new().read_text(&path).unwrap_err();
        assert!(matches!(err, DigestError::Binary { .. }));
    }

    #[test]
    fn test_write_truncate_then_append() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.txt");
        std::fs::write(&path, "stale").unwrap();

        let fs = OsFileSystem::new();
        fs.write_text(&path, "", WriteMode::Truncate).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

        fs.write_text(&path, "one", WriteMode::Append).unwrap();
        fs.write_text(&path, "two", WriteMode::Append).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "onetwo");
    }
}
