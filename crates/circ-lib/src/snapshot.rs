//! Snapshot file I/O.
//!
//! The whole library (catalog, directory, hold queues, transaction log,
//! counters) is written as a single JSON document. The on-disk layout is an
//! implementation detail, not a wire contract; the only promise is that
//! `load(save(library))` reproduces equivalent state.

use std::fs;
use std::io::{BufReader, Write};
use std::path::Path;

use crate::error::{LendError, Result};
use crate::library::Library;

/// Load a library snapshot.
///
/// # Errors
///
/// Returns `FileNotFound` if there is no file at `path`, `Io` on read
/// failure, or `SnapshotParse` if the contents cannot be decoded.
pub fn load(path: &Path) -> Result<Library> {
    let file = fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LendError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LendError::Io(e)
        }
    })?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|e| LendError::SnapshotParse {
        reason: e.to_string(),
    })
}

/// Save a library snapshot with atomic write.
///
/// Uses write-to-temp + rename so a failed write never clobbers the
/// previous snapshot.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written, or `Json` on encode failure.
pub fn save(path: &Path, library: &Library) -> Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&tmp_path)?;

    let json = serde_json::to_string_pretty(library)?;
    file.write_all(json.as_bytes())?;
    writeln!(file)?;
    file.flush()?;
    drop(file);

    fs::rename(&tmp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TransactionKind;

    #[test]
    fn test_roundtrip_deep_equality() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");

        let mut library = Library::new();
        let ann = library.add_member("Ann", "1 Oak St", "555-0100").unwrap();
        let bob = library.add_member("Bob", "2 Elm St", "555-0101").unwrap();
        library.add_book("Dune", "Herbert", "b1").unwrap();
        library.add_book("Emma", "Austen", "b2").unwrap();
        library.issue_book(&ann.id, "b1").unwrap();
        library.place_hold(&bob.id, "b1", 7).unwrap();

        save(&path, &library).unwrap();
        let loaded = load(&path).unwrap();

        // Catalog, directory, hold queues survive intact.
        let books: Vec<_> = library.books().collect();
        let loaded_books: Vec<_> = loaded.books().collect();
        assert_eq!(books, loaded_books);
        assert_eq!(
            library.members().collect::<Vec<_>>(),
            loaded.members().collect::<Vec<_>>()
        );
        assert_eq!(
            library.transactions().collect::<Vec<_>>(),
            loaded.transactions().collect::<Vec<_>>()
        );
        assert_eq!(loaded.find_book("b1").unwrap().holds.len(), 1);

        // Counters survive: new records keep advancing, not colliding.
        let mut loaded = loaded;
        let carl = loaded.add_member("Carl", "3 Fir St", "555-0102").unwrap();
        assert_eq!(carl.id, "m-3");
        loaded.issue_book(&carl.id, "b2").unwrap();
        let last = loaded.transactions().last().unwrap();
        assert_eq!(last.kind, TransactionKind::Issue);
        assert!(last.id > 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load(Path::new("/nonexistent/library.json"));
        assert!(matches!(result, Err(LendError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_garbage_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        fs::write(&path, "not json at all").unwrap();

        let result = load(&path);
        assert!(matches!(result, Err(LendError::SnapshotParse { .. })));
    }

    #[test]
    fn test_open_remembers_path_for_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");

        let mut library = Library::new();
        library.add_book("Dune", "Herbert", "b1").unwrap();
        library.save_to(&path).unwrap();

        let mut reopened = Library::open(&path).unwrap();
        reopened.add_book("Emma", "Austen", "b2").unwrap();
        reopened.save().unwrap();

        let again = Library::open(&path).unwrap();
        assert_eq!(again.books().count(), 2);
    }

    #[test]
    fn test_save_without_path_fails() {
        let library = Library::new();
        assert!(matches!(library.save(), Err(LendError::OperationFailed)));
    }
}
