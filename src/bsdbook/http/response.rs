use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    BadRequest,
    NotFound,
    InternalServerError,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::InternalServerError => 500,
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::BadRequest => "Bad Request",
            Status::NotFound => "Not Found",
            Status::InternalServerError => "Internal Server Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Response {
    pub fn text(status: Status, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: CONTENT_TYPE_TEXT,
            body: body.into(),
        }
    }

    /// Plain-text error page: `"<code> <message>\r\n"`.
    pub fn error(status: Status, message: &str) -> Self {
        Self::text(status, format!("{} {}\r\n", status.code(), message))
    }

    /// Pretty-printed JSON, or a 500 if the value cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_vec_pretty(value) {
            Ok(body) => Self {
                status: Status::Ok,
                content_type: CONTENT_TYPE_JSON,
                body,
            },
            Err(e) => {
                error!(error = %e, "JSON serialization failed");
                Self::error(Status::InternalServerError, "JSON Serialization Failed")
            }
        }
    }

    pub fn head(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
            self.status.code(),
            self.status.reason(),
            self.content_type,
            self.body.len()
        )
    }

    /// Writes the status line, headers and body, retrying partial writes.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.head().as_bytes())?;
        writer.write_all(&self.body)?;
        writer.flush()
    }
}
