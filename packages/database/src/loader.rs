//! Loads the static SQLite image into an in-memory database handle.

use std::io::Read as _;
use std::path::Path;
use std::time::Duration;

use rusqlite::backup::Backup;
use rusqlite::{Connection, OpenFlags};

use crate::DbError;

/// First 16 bytes of every SQLite database file.
const SQLITE_MAGIC: &[u8; 16] = b"SQLite format 3\0";

/// Pages copied per backup step. The whole image is copied eagerly; the
/// step size only bounds peak time spent inside a single backup call.
const BACKUP_PAGES_PER_STEP: std::os::raw::c_int = 256;

/// Opens the SQLite image at `path` as a fresh in-memory database.
///
/// The file header is checked before the engine touches the file, so a
/// truncated or non-SQLite file fails with [`DbError::NotADatabase`]
/// rather than a generic engine error. The on-disk file is opened
/// read-only and copied into memory via the SQLite online backup API;
/// the file handle is closed before this function returns.
///
/// # Errors
///
/// Returns [`DbError::Io`] if the file cannot be read,
/// [`DbError::NotADatabase`] if its bytes are not a SQLite image, or
/// [`DbError::Sqlite`] if the copy fails.
pub fn open_image(path: &Path) -> Result<Connection, DbError> {
    let mut header = [0u8; 16];
    let mut file = std::fs::File::open(path)?;
    file.read_exact(&mut header).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            DbError::NotADatabase {
                path: path.display().to_string(),
            }
        } else {
            DbError::Io(e)
        }
    })?;
    drop(file);

    if &header != SQLITE_MAGIC {
        return Err(DbError::NotADatabase {
            path: path.display().to_string(),
        });
    }

    let source = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    let mut db = Connection::open_in_memory()?;

    {
        let backup = Backup::new(&source, &mut db)?;
        backup.run_to_completion(BACKUP_PAGES_PER_STEP, Duration::from_millis(0), None)?;
    }

    log::debug!("Loaded database image {} into memory", path.display());

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn fixture_dir() -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("crash_map_loader_test");
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_fixture_db(path: &Path) {
        let _ = std::fs::remove_file(path);
        let conn = Connection::open(path).unwrap();
        conn.execute_batch(
            "CREATE TABLE ACCIDENT (
                ACCIDENT_NO TEXT PRIMARY KEY,
                ACCIDENT_DATE TEXT,
                NO_PERSONS INTEGER
            );
            INSERT INTO ACCIDENT VALUES ('T20200001', '2020-03-14', 2);",
        )
        .unwrap();
    }

    #[test]
    fn opens_image_into_memory() {
        let path = fixture_dir().join("valid.sqlite");
        write_fixture_db(&path);

        let db = open_image(&path).unwrap();
        let count: i64 = db
            .query_row("SELECT COUNT(*) FROM ACCIDENT", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn in_memory_copy_outlives_source_file() {
        let path = fixture_dir().join("deleted.sqlite");
        write_fixture_db(&path);

        let db = open_image(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let persons: i64 = db
            .query_row(
                "SELECT NO_PERSONS FROM ACCIDENT WHERE ACCIDENT_NO = 'T20200001'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(persons, 2);
    }

    #[test]
    fn rejects_non_database_bytes() {
        let path = fixture_dir().join("garbage.sqlite");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"this is definitely not a database image")
            .unwrap();
        drop(file);

        assert!(matches!(
            open_image(&path),
            Err(DbError::NotADatabase { .. })
        ));
    }

    #[test]
    fn rejects_truncated_file() {
        let path = fixture_dir().join("truncated.sqlite");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"SQLite").unwrap();
        drop(file);

        assert!(matches!(
            open_image(&path),
            Err(DbError::NotADatabase { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = fixture_dir().join("does_not_exist.sqlite");
        assert!(matches!(open_image(&path), Err(DbError::Io(_))));
    }
}
