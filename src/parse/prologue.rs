use std::sync::LazyLock;

use regex::Regex;

static REQUEST_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]{3,7}) (.+) (HTTPS?)/(1\.0|1\.1|2\.0)$").unwrap()
});

static STATUS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(HTTPS?)/(1\.0|1\.1|2\.0) ([0-9]{3})(?: (.*))?$").unwrap()
});

pub struct RequestLine<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub scheme: &'a str,
    pub scheme_version: &'a str,
}

pub struct StatusLine<'a> {
    pub scheme: &'a str,
    pub scheme_version: &'a str,
    pub status_code: &'a str,
    pub reason_phrase: &'a str,
}

pub fn request_line(line: &str) -> Option<RequestLine<'_>> {
    let captures = REQUEST_LINE.captures(line)?;

    Some(RequestLine {
        method: captures.get(1)?.as_str(),
        path: captures.get(2)?.as_str(),
        scheme: captures.get(3)?.as_str(),
        scheme_version: captures.get(4)?.as_str(),
    })
}

pub fn status_line(line: &str) -> Option<StatusLine<'_>> {
    let captures = STATUS_LINE.captures(line)?;

    Some(StatusLine {
        scheme: captures.get(1)?.as_str(),
        scheme_version: captures.get(2)?.as_str(),
        status_code: captures.get(3)?.as_str(),
        // Some servers omit the space and the reason phrase entirely.
        reason_phrase: captures.get(4).map(|m| m.as_str()).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_line() {
        let line = request_line("GET /users HTTP/1.1").unwrap();
        assert_eq!(line.method, "GET");
        assert_eq!(line.path, "/users");
        assert_eq!(line.scheme, "HTTP");
        assert_eq!(line.scheme_version, "1.1");

        let line = request_line("OPTIONS /a b HTTPS/2.0").unwrap();
        assert_eq!(line.method, "OPTIONS");
        assert_eq!(line.path, "/a b");
        assert_eq!(line.scheme, "HTTPS");
        assert_eq!(line.scheme_version, "2.0");
    }

    #[test]
    fn test_request_line_invalid() {
        assert!(request_line("").is_none());
        assert!(request_line("get / HTTP/1.1").is_none());
        assert!(request_line("GE / HTTP/1.1").is_none());
        assert!(request_line("GET / HTTP/1.5").is_none());
        assert!(request_line("GET / FTP/1.1").is_none());
        assert!(request_line("GET  HTTP/1.1").is_none());
        assert!(request_line("GET / HTTP/1.1 ").is_none());
    }

    #[test]
    fn test_status_line() {
        let line = status_line("HTTP/1.1 404 Not Found").unwrap();
        assert_eq!(line.scheme, "HTTP");
        assert_eq!(line.scheme_version, "1.1");
        assert_eq!(line.status_code, "404");
        assert_eq!(line.reason_phrase, "Not Found");

        let line = status_line("HTTPS/2.0 200 ").unwrap();
        assert_eq!(line.status_code, "200");
        assert_eq!(line.reason_phrase, "");

        let line = status_line("HTTP/1.0 204").unwrap();
        assert_eq!(line.status_code, "204");
        assert_eq!(line.reason_phrase, "");
    }

    #[test]
    fn test_status_line_invalid() {
        assert!(status_line("HTTP/1.1 20 OK").is_none());
        assert!(status_line("HTTP/1.1 2000 OK").is_none());
        assert!(status_line("HTTP/3.0 200 OK").is_none());
        assert!(status_line("ICY 200 OK").is_none());
    }
}
