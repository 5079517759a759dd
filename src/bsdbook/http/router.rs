use super::request::parse_request_line;
use super::response::{Response, Status};
use crate::error::BookError;
use crate::model::Note;
use crate::store::DataStore;
use tracing::warn;

const BOOKS_PATH: &str = "/books";
const BOOK_NOTES_PREFIX: &str = "/books/";
const NOTE_CONTENT_PREFIX: &str = "/book/";

/// Parses the raw request bytes and produces the full response for them.
pub fn handle_request<S: DataStore>(store: &S, raw: &[u8]) -> (Option<String>, Response) {
    match parse_request_line(raw) {
        Ok(req) => {
            let resp = route(store, &req.path);
            (Some(req.path), resp)
        }
        Err(e) => {
            warn!(error = %e, "rejecting request");
            (None, Response::error(Status::BadRequest, "Bad Request"))
        }
    }
}

pub fn route<S: DataStore>(store: &S, path: &str) -> Response {
    if path == BOOKS_PATH {
        list_books(store)
    } else if let Some(book) = path.strip_prefix(BOOK_NOTES_PREFIX) {
        list_notes(store, book)
    } else if let Some(rest) = path.strip_prefix(NOTE_CONTENT_PREFIX) {
        note_content(store, rest)
    } else {
        Response::error(Status::NotFound, "Not Found")
    }
}

fn list_books<S: DataStore>(store: &S) -> Response {
    let books = store.list_books_detailed();
    if books.is_empty() {
        return Response::error(Status::NotFound, "No Books Found");
    }
    Response::json(&books)
}

fn list_notes<S: DataStore>(store: &S, book: &str) -> Response {
    match store.list_notes(book) {
        Ok(names) => {
            let notes: Vec<Note> = names.into_iter().map(|name| Note { name }).collect();
            Response::json(&notes)
        }
        Err(e) => error_response(&e, "No Notes Found"),
    }
}

fn note_content<S: DataStore>(store: &S, rest: &str) -> Response {
    let segments: Vec<&str> = rest.split('/').collect();
    let [book, note] = segments.as_slice() else {
        return Response::error(Status::BadRequest, "Bad Request - Invalid path format");
    };
    if book.is_empty() || note.is_empty() {
        return Response::error(Status::BadRequest, "Bad Request - Invalid path format");
    }

    match store.read_note_content(book, note) {
        Ok(content) => Response::text(Status::Ok, content),
        Err(e) => error_response(&e, "Note Not Found"),
    }
}

fn error_response(err: &BookError, not_found_message: &str) -> Response {
    match err {
        BookError::InvalidName(_) | BookError::InvalidRequest(_) => {
            Response::error(Status::BadRequest, "Bad Request")
        }
        e if e.is_not_found() => Response::error(Status::NotFound, not_found_message),
        e => {
            warn!(error = %e, "store failure while serving request");
            Response::error(Status::InternalServerError, "Internal Server Error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::{CONTENT_TYPE_JSON, CONTENT_TYPE_TEXT};
    use crate::paths::BookPaths;
    use crate::store::fs::FileStore;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(BookPaths::new(temp.path()));
        (temp, store)
    }

    fn json(resp: &Response) -> serde_json::Value {
        serde_json::from_slice(&resp.body).unwrap()
    }

    #[test]
    fn books_on_empty_root_is_404() {
        let (_temp, store) = setup();
        assert_eq!(route(&store, "/books").status, Status::NotFound);
    }

    #[test]
    fn books_lists_names_and_counts() {
        let (_temp, store) = setup();
        store.create_book("a").unwrap();
        store.create_book("b").unwrap();
        store.create_note("b", "n").unwrap();

        let resp = route(&store, "/books");
        assert_eq!(resp.status, Status::Ok);
        assert_eq!(resp.content_type, CONTENT_TYPE_JSON);

        let value = json(&resp);
        let mut books = value.as_array().unwrap().clone();
        books.sort_by_key(|b| b["name"].as_str().unwrap().to_string());
        assert_eq!(
            books,
            vec![
                serde_json::json!({"name": "a", "notes_count": 0}),
                serde_json::json!({"name": "b", "notes_count": 1}),
            ]
        );
    }

    #[test]
    fn book_notes_listing() {
        let (_temp, store) = setup();
        store.create_book("work").unwrap();
        store.create_note("work", "todo").unwrap();

        let resp = route(&store, "/books/work");
        assert_eq!(resp.status, Status::Ok);
        assert_eq!(json(&resp), serde_json::json!([{"name": "todo"}]));
    }

    #[test]
    fn empty_book_is_empty_array() {
        let (_temp, store) = setup();
        store.create_book("work").unwrap();

        let resp = route(&store, "/books/work");
        assert_eq!(resp.status, Status::Ok);
        assert_eq!(json(&resp), serde_json::json!([]));
    }

    #[test]
    fn missing_book_is_404_and_bad_name_is_400() {
        let (_temp, store) = setup();
        assert_eq!(route(&store, "/books/ghost").status, Status::NotFound);
        assert_eq!(route(&store, "/books/").status, Status::BadRequest);
        assert_eq!(route(&store, "/books/..").status, Status::BadRequest);
        assert_eq!(route(&store, "/books/a/b").status, Status::BadRequest);
    }

    #[test]
    fn note_content_is_raw_bytes() {
        let (_temp, store) = setup();
        store.create_book("life").unwrap();
        let path = store.create_note("life", "errands").unwrap();
        fs::write(path, "buy milk #todo\n").unwrap();

        let resp = route(&store, "/book/life/errands");
        assert_eq!(resp.status, Status::Ok);
        assert_eq!(resp.content_type, CONTENT_TYPE_TEXT);
        assert_eq!(resp.body, b"buy milk #todo\n");
    }

    #[test]
    fn note_path_shapes() {
        let (_temp, store) = setup();
        store.create_book("life").unwrap();

        assert_eq!(route(&store, "/book/life/missing").status, Status::NotFound);
        assert_eq!(route(&store, "/book/life").status, Status::BadRequest);
        assert_eq!(route(&store, "/book/life/").status, Status::BadRequest);
        assert_eq!(route(&store, "/book//x").status, Status::BadRequest);
        assert_eq!(route(&store, "/book/a/b/c").status, Status::BadRequest);
        assert_eq!(route(&store, "/book/../x").status, Status::BadRequest);
    }

    #[test]
    fn unknown_paths_are_404() {
        let (_temp, store) = setup();
        store.create_book("a").unwrap();
        for path in ["/", "/book", "/booksx", "/notes"] {
            assert_eq!(route(&store, path).status, Status::NotFound, "{path}");
        }
    }

    #[test]
    fn malformed_request_is_400() {
        let (_temp, store) = setup();
        let (path, resp) = handle_request(&store, b"DELETE /books HTTP/1.1\r\n\r\n");
        assert_eq!(path, None);
        assert_eq!(resp.status, Status::BadRequest);
        assert_eq!(resp.body, b"400 Bad Request\r\n");
    }
}
