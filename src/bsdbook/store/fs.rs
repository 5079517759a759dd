use super::{tree, DataStore};
use crate::error::{BookError, Result};
use crate::model::{Book, NoteEntry};
use crate::paths::BookPaths;
use chrono::{DateTime, Local};
use std::fs::{self, DirEntry, File, OpenOptions};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const BOOK_DIR_MODE: u32 = 0o755;

pub struct FileStore {
    paths: BookPaths,
}

impl FileStore {
    pub fn new(paths: BookPaths) -> Self {
        Self { paths }
    }

    /// Directory entries of `dir`, skipping (and logging) unreadable ones.
    fn entries(dir: &Path) -> io::Result<impl Iterator<Item = DirEntry>> {
        let dir_display = dir.display().to_string();
        Ok(fs::read_dir(dir)?.filter_map(move |entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(dir = %dir_display, error = %e, "skipping unreadable directory entry");
                None
            }
        }))
    }

    fn entry_name(entry: &DirEntry) -> String {
        entry.file_name().to_string_lossy().into_owned()
    }

    fn open_book(&self, book: &str) -> Result<(PathBuf, impl Iterator<Item = DirEntry>)> {
        let dir = self.paths.book_dir(book)?;
        match Self::entries(&dir) {
            Ok(entries) => Ok((dir, entries)),
            Err(e) => {
                debug!(book, path = %dir.display(), error = %e, "unable to open book directory");
                Err(BookError::BookNotFound(book.to_string()))
            }
        }
    }

    fn mkdir(path: &Path) -> io::Result<()> {
        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(BOOK_DIR_MODE);
        }
        builder.create(path)
    }
}

// `stat` semantics: symlinks are followed when classifying entries.
fn is_dir(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

fn is_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

impl DataStore for FileStore {
    fn paths(&self) -> &BookPaths {
        &self.paths
    }

    fn list_books(&self) -> Vec<String> {
        let root = self.paths.root();
        let entries = match Self::entries(root) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %root.display(), error = %e, "unable to open books root");
                return Vec::new();
            }
        };

        entries
            .filter(|entry| is_dir(&entry.path()))
            .map(|entry| Self::entry_name(&entry))
            .collect()
    }

    fn list_books_detailed(&self) -> Vec<Book> {
        self.list_books()
            .into_iter()
            .map(|name| {
                let notes_count = self.list_notes(&name).map(|n| n.len()).unwrap_or(0);
                Book { name, notes_count }
            })
            .collect()
    }

    fn create_book(&self, name: &str) -> Result<PathBuf> {
        let dir = self.paths.book_dir(name)?;
        match Self::mkdir(&dir) {
            Ok(()) => {
                debug!(book = name, path = %dir.display(), "created book");
                Ok(dir)
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(BookError::AlreadyExists(dir))
            }
            Err(e) => Err(BookError::Io(e)),
        }
    }

    fn delete_book(&self, name: &str) -> Result<()> {
        let dir = self.paths.book_dir(name)?;
        // Only directories are books. A symlink to one is unlinked, never walked.
        let is_book = match fs::symlink_metadata(&dir) {
            Ok(meta) if meta.is_dir() => true,
            Ok(meta) if meta.file_type().is_symlink() => is_dir(&dir),
            _ => false,
        };
        if !is_book {
            return Err(BookError::BookNotFound(name.to_string()));
        }
        match tree::delete_tree(&dir) {
            Err(BookError::NotFound(_)) => Err(BookError::BookNotFound(name.to_string())),
            other => other,
        }
    }

    fn list_notes(&self, book: &str) -> Result<Vec<String>> {
        let (_, entries) = self.open_book(book)?;
        Ok(entries
            .filter(|entry| is_file(&entry.path()))
            .filter_map(|entry| {
                let file_name = Self::entry_name(&entry);
                self.paths
                    .note_name_from_file(&file_name)
                    .map(str::to_string)
            })
            .collect())
    }

    fn list_notes_with_timestamps(&self, book: &str) -> Result<Vec<NoteEntry>> {
        let (_, entries) = self.open_book(book)?;
        let mut notes = Vec::new();
        for entry in entries {
            let path = entry.path();
            let meta = match fs::metadata(&path) {
                Ok(meta) if meta.is_file() => meta,
                Ok(_) => continue,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "unable to stat note");
                    continue;
                }
            };
            let modified = match meta.modified() {
                Ok(time) => time,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "no modification time for note");
                    continue;
                }
            };
            notes.push(NoteEntry {
                name: Self::entry_name(&entry),
                last_modified: DateTime::<Local>::from(modified),
            });
        }
        Ok(notes)
    }

    fn create_note(&self, book: &str, name: &str) -> Result<PathBuf> {
        let book_dir = self.paths.book_dir(book)?;
        let note_file = self.paths.note_file(book, name)?;
        if !is_dir(&book_dir) {
            return Err(BookError::BookMissing(book.to_string()));
        }

        match OpenOptions::new()
            .append(true)
            .create_new(true)
            .open(&note_file)
        {
            Ok(_) => {
                debug!(book, note = name, path = %note_file.display(), "created note");
                Ok(note_file)
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(BookError::AlreadyExists(note_file))
            }
            Err(e) => Err(BookError::Io(e)),
        }
    }

    fn read_note_content(&self, book: &str, name: &str) -> Result<Vec<u8>> {
        let path = self.paths.note_file(book, name)?;
        let not_found = || BookError::NoteNotFound {
            book: book.to_string(),
            note: name.to_string(),
        };

        let mut file = File::open(&path).map_err(|e| {
            debug!(path = %path.display(), error = %e, "unable to open note");
            not_found()
        })?;
        let meta = file.metadata()?;
        if !meta.is_file() {
            return Err(not_found());
        }

        let mut content = Vec::with_capacity(meta.len() as usize);
        file.read_to_end(&mut content)?;
        Ok(content)
    }

    fn delete_note(&self, book: &str, name: &str) -> Result<()> {
        let path = self.paths.note_file(book, name)?;
        fs::remove_file(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                BookError::NoteNotFound {
                    book: book.to_string(),
                    note: name.to_string(),
                }
            } else {
                BookError::Io(e)
            }
        })
    }

    fn note_path(&self, book: &str, name: &str) -> Result<PathBuf> {
        self.paths.note_file(book, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(BookPaths::new(temp.path()));
        (temp, store)
    }

    #[test]
    fn create_then_list_books_once() {
        let (_temp, store) = setup();
        store.create_book("work").unwrap();

        let books = store.list_books();
        assert_eq!(books.iter().filter(|b| *b == "work").count(), 1);
    }

    #[test]
    fn duplicate_book_is_rejected() {
        let (temp, store) = setup();
        store.create_book("work").unwrap();

        let err = store.create_book("work").unwrap_err();
        assert!(matches!(err, BookError::AlreadyExists(_)));
        assert_eq!(store.list_books(), vec!["work".to_string()]);
        assert!(temp.path().join("work").is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn book_directory_mode_respects_0755() {
        use std::os::unix::fs::PermissionsExt;
        let (_temp, store) = setup();
        let dir = store.create_book("perm").unwrap();
        let mode = fs::metadata(dir).unwrap().permissions().mode() & 0o777;
        // umask may only clear bits
        assert_eq!(mode & !BOOK_DIR_MODE, 0);
        assert_eq!(mode & 0o700, 0o700);
    }

    #[test]
    fn list_books_skips_files() {
        let (temp, store) = setup();
        store.create_book("a").unwrap();
        fs::write(temp.path().join("config.json"), "{}").unwrap();

        assert_eq!(store.list_books(), vec!["a".to_string()]);
    }

    #[test]
    fn missing_root_lists_nothing() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(BookPaths::new(temp.path().join("nope")));
        assert!(store.list_books().is_empty());
        assert!(store.list_books_detailed().is_empty());
    }

    #[test]
    fn detailed_listing_counts_notes() {
        let (_temp, store) = setup();
        store.create_book("work").unwrap();
        store.create_book("empty").unwrap();
        store.create_note("work", "todo").unwrap();
        store.create_note("work", "ideas").unwrap();

        let mut books = store.list_books_detailed();
        books.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(
            books,
            vec![
                Book {
                    name: "empty".into(),
                    notes_count: 0
                },
                Book {
                    name: "work".into(),
                    notes_count: 2
                },
            ]
        );
    }

    #[test]
    fn note_in_missing_book_creates_nothing() {
        let (temp, store) = setup();
        let err = store.create_note("ghost", "todo").unwrap_err();
        assert!(matches!(err, BookError::BookMissing(_)));
        assert!(!temp.path().join("ghost").exists());
    }

    #[test]
    fn note_in_file_named_like_book_is_book_missing() {
        let (temp, store) = setup();
        fs::write(temp.path().join("notadir"), "").unwrap();
        let err = store.create_note("notadir", "todo").unwrap_err();
        assert!(matches!(err, BookError::BookMissing(_)));
    }

    #[test]
    fn duplicate_note_is_rejected_and_not_truncated() {
        let (temp, store) = setup();
        store.create_book("work").unwrap();
        let path = store.create_note("work", "todo").unwrap();
        fs::write(&path, "keep me").unwrap();

        let err = store.create_note("work", "todo").unwrap_err();
        assert!(matches!(err, BookError::AlreadyExists(_)));
        assert_eq!(
            fs::read_to_string(temp.path().join("work/todo.bdsb")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn new_note_is_empty_and_round_trips_external_edits() {
        let (_temp, store) = setup();
        store.create_book("work").unwrap();
        let path = store.create_note("work", "todo").unwrap();

        assert_eq!(store.read_note_content("work", "todo").unwrap(), Vec::<u8>::new());

        let bytes = b"line one\n\xffraw bytes\n".to_vec();
        fs::write(&path, &bytes).unwrap();
        assert_eq!(store.read_note_content("work", "todo").unwrap(), bytes);
    }

    #[test]
    fn reading_missing_note_is_not_found() {
        let (_temp, store) = setup();
        store.create_book("work").unwrap();
        assert!(matches!(
            store.read_note_content("work", "nope"),
            Err(BookError::NoteNotFound { .. })
        ));
    }

    #[test]
    fn list_notes_strips_extension_and_filters() {
        let (temp, store) = setup();
        store.create_book("work").unwrap();
        store.create_note("work", "todo").unwrap();
        fs::write(temp.path().join("work/readme.txt"), "x").unwrap();
        fs::create_dir(temp.path().join("work/sub.bdsb")).unwrap();

        assert_eq!(store.list_notes("work").unwrap(), vec!["todo".to_string()]);
    }

    #[test]
    fn empty_book_lists_no_notes() {
        let (_temp, store) = setup();
        store.create_book("work").unwrap();
        assert!(store.list_notes("work").unwrap().is_empty());
    }

    #[test]
    fn missing_book_lists_as_not_found() {
        let (_temp, store) = setup();
        assert!(matches!(
            store.list_notes("ghost"),
            Err(BookError::BookNotFound(_))
        ));
    }

    #[test]
    fn delete_note_leaves_siblings() {
        let (temp, store) = setup();
        store.create_book("work").unwrap();
        store.create_note("work", "todo").unwrap();
        store.create_note("work", "ideas").unwrap();

        store.delete_note("work", "todo").unwrap();
        assert!(!temp.path().join("work/todo.bdsb").exists());
        assert!(temp.path().join("work/ideas.bdsb").exists());
        assert!(temp.path().join("work").is_dir());
    }

    #[test]
    fn delete_missing_note_is_not_found() {
        let (_temp, store) = setup();
        store.create_book("work").unwrap();
        assert!(matches!(
            store.delete_note("work", "todo"),
            Err(BookError::NoteNotFound { .. })
        ));
    }

    #[test]
    fn timestamps_cover_every_regular_file() {
        let (temp, store) = setup();
        store.create_book("work").unwrap();
        store.create_note("work", "todo").unwrap();
        fs::write(temp.path().join("work/readme.txt"), "x").unwrap();
        fs::create_dir(temp.path().join("work/sub")).unwrap();

        let mut names: Vec<_> = store
            .list_notes_with_timestamps("work")
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["readme.txt", "todo.bdsb"]);
    }

    #[test]
    fn delete_book_removes_everything() {
        let (temp, store) = setup();
        store.create_book("work").unwrap();
        store.create_note("work", "todo").unwrap();
        fs::create_dir_all(temp.path().join("work/nested/deeper")).unwrap();

        store.delete_book("work").unwrap();
        assert!(!temp.path().join("work").exists());
        assert!(matches!(
            store.delete_book("work"),
            Err(BookError::BookNotFound(_))
        ));
    }

    /// Collects formatted log output written at `WARN` and above.
    #[derive(Clone, Default)]
    struct WarnLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl io::Write for WarnLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn missing_book_is_not_a_warning() {
        let (_temp, store) = setup();
        let log = WarnLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            assert!(matches!(
                store.list_notes("ghost"),
                Err(BookError::BookNotFound(_))
            ));
        });
        assert!(log.0.lock().unwrap().is_empty());
    }

    #[test]
    fn delete_book_refuses_plain_files() {
        let (temp, store) = setup();
        let config = temp.path().join("config.json");
        fs::write(&config, "{}").unwrap();

        assert!(matches!(
            store.delete_book("config.json"),
            Err(BookError::BookNotFound(_))
        ));
        assert!(config.is_file());
    }

    #[cfg(unix)]
    #[test]
    fn delete_book_unlinks_symlinked_book_without_walking_it() {
        let (temp, store) = setup();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("keep.bdsb"), "x").unwrap();
        std::os::unix::fs::symlink(outside.path(), temp.path().join("linked")).unwrap();

        store.delete_book("linked").unwrap();
        assert!(fs::symlink_metadata(temp.path().join("linked")).is_err());
        assert!(outside.path().join("keep.bdsb").is_file());
    }

    #[test]
    fn traversal_names_never_touch_disk() {
        let (temp, store) = setup();
        assert!(matches!(
            store.create_book("../escape"),
            Err(BookError::InvalidName(_))
        ));
        assert!(matches!(
            store.read_note_content("..", "passwd"),
            Err(BookError::InvalidName(_))
        ));
        assert!(!temp.path().parent().unwrap().join("escape").exists());
    }
}
