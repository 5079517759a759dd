use crate::error::{BookError, Result};
use std::io::{self, Read};

const SUPPORTED_VERSIONS: &[&str] = &["HTTP/1.0", "HTTP/1.1"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: String,
    pub path: String,
    pub version: String,
}

/// Reads from `reader` until the end of the first line, EOF, or `max_len` bytes.
///
/// Headers and body that arrive in the same reads are kept in the buffer but never
/// looked at.
pub fn read_request_head<R: Read>(reader: &mut R, max_len: usize) -> io::Result<Vec<u8>> {
    let mut buf = vec![0u8; max_len];
    let mut filled = 0;
    while filled < max_len {
        let n = match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        let newline_seen = buf[filled..filled + n].contains(&b'\n');
        filled += n;
        if newline_seen {
            break;
        }
    }
    buf.truncate(filled);
    Ok(buf)
}

/// Parses `GET <path> HTTP/1.0` or `HTTP/1.1` out of the first line of `raw`.
pub fn parse_request_line(raw: &[u8]) -> Result<RequestLine> {
    let line_end = raw.iter().position(|&b| b == b'\n').unwrap_or(raw.len());
    let line = std::str::from_utf8(&raw[..line_end])
        .map_err(|_| BookError::InvalidRequest("request line is not UTF-8".to_string()))?
        .trim_end_matches('\r');

    let mut parts = line.split(' ');
    let (Some(method), Some(path), Some(version), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(BookError::InvalidRequest(format!("malformed request line: {:?}", line)));
    };

    if method != "GET" {
        return Err(BookError::InvalidRequest(format!("unsupported method: {}", method)));
    }
    if !path.starts_with('/') {
        return Err(BookError::InvalidRequest(format!("invalid path: {:?}", path)));
    }
    if !SUPPORTED_VERSIONS.contains(&version) {
        return Err(BookError::InvalidRequest(format!("unsupported version: {}", version)));
    }

    Ok(RequestLine {
        method: method.to_string(),
        path: path.to_string(),
        version: version.to_string(),
    })
}
