//! Parsing of message text.
//!
//! Every function here is a pure transformation over a complete message
//! buffer. The prologue grammars are regular expressions compiled once per
//! process; header lines are parsed with `nom`.
use nom::{Parser, combinator::all_consuming};

use crate::{
    error::{MalformedKind, MalformedMessageError, MessageError},
    message::{Message, MessageKind, MessageParts},
    request::Request,
    response::Response,
};

pub(crate) mod fields;
pub(crate) mod prologue;

pub use fields::HeaderLineRef;

const LINE_BREAK: &str = "\n";
const HEADER_DELIMINATOR: &str = "\n\n";

/// Parse a message of the given kind.
pub fn parse(text: &str, kind: MessageKind) -> Result<Message, MessageError> {
    match kind {
        MessageKind::Request => Ok(Message::Request(parse_request(text)?)),
        MessageKind::Response => Ok(Message::Response(parse_response(text)?)),
    }
}

/// Guess the kind of a message from its first line.
///
/// Status lines start with the scheme; anything else is treated as a
/// request line.
pub fn detect_kind(text: &str) -> MessageKind {
    let line = prologue_line(text);

    if line.starts_with("HTTP/") || line.starts_with("HTTPS/") {
        MessageKind::Response
    } else {
        MessageKind::Request
    }
}

/// Parse a request message.
pub fn parse_request(text: &str) -> Result<Request, MessageError> {
    check_not_empty(text)?;

    let line = prologue_line(text);
    let request_line = prologue::request_line(line).ok_or_else(|| malformed_prologue(line))?;

    let parts = parse_parts(text, request_line.scheme, request_line.scheme_version)?;
    let request = Request::from_parts(request_line.method, request_line.path, parts)?;

    tracing::trace!(
        method = %request.method(),
        path = request.path(),
        header_count = request.headers().len(),
        body_len = request.body().len(),
        "parsed request"
    );

    Ok(request)
}

/// Parse a response message.
pub fn parse_response(text: &str) -> Result<Response, MessageError> {
    check_not_empty(text)?;

    let line = prologue_line(text);
    let status_line = prologue::status_line(line).ok_or_else(|| malformed_prologue(line))?;

    let parts = parse_parts(text, status_line.scheme, status_line.scheme_version)?;
    let response =
        Response::from_parts(status_line.status_code, status_line.reason_phrase, parts)?;

    tracing::trace!(
        status_code = response.status_code().as_u16(),
        header_count = response.headers().len(),
        body_len = response.body().len(),
        "parsed response"
    );

    Ok(response)
}

fn parse_parts(
    text: &str,
    scheme: &str,
    scheme_version: &str,
) -> Result<MessageParts, MessageError> {
    let lines = parse_header_block(text)?;
    let body = parse_body(text);

    MessageParts::new(
        scheme,
        scheme_version,
        lines.into_iter().map(|line| (line.name, line.value)),
        body,
    )
}

/// Parse the header lines between the prologue and the first empty line.
///
/// Header lines are numbered from 2 in error positions, the prologue being
/// line 1. Duplicate names are returned as is.
pub fn parse_header_block(text: &str) -> Result<Vec<HeaderLineRef<'_>>, MalformedMessageError> {
    let end = text
        .find(HEADER_DELIMINATOR)
        .ok_or_else(|| MalformedMessageError::new(MalformedKind::MissingHeaderSeparator))?;
    // The deliminator can start at the prologue's own line break when there
    // are no header lines, so the span is empty rather than inverted.
    let start = text.find(LINE_BREAK).map_or(end, |index| index + 1);
    let block = text.get(start..end).unwrap_or_default();

    let mut output = Vec::new();

    for (index, line) in block.split(LINE_BREAK).enumerate() {
        if line.is_empty() {
            break;
        }

        let (_remain, header_line) = fields::header_line(line).map_err(|error| {
            MalformedMessageError::new(MalformedKind::InvalidHeaderLine)
                .with_position(index as u64 + 2)
                .with_snippet(line.escape_debug().to_string())
                .with_source(error.to_string())
        })?;

        output.push(header_line);
    }

    Ok(output)
}

/// Returns everything after the first empty line.
///
/// The result is empty when there is no body or no header deliminator.
pub fn parse_body(text: &str) -> &str {
    text.find(HEADER_DELIMINATOR)
        .map(|index| &text[index + HEADER_DELIMINATOR.len()..])
        .unwrap_or_default()
}

/// Returns whether the value is a valid header name.
pub fn validate_header_name(value: &str) -> bool {
    all_consuming(fields::header_name).parse(value).is_ok()
}

/// Returns whether the value can be used as a header value.
pub fn validate_header_value(value: &str) -> bool {
    all_consuming(fields::header_value).parse(value).is_ok()
}

/// Returns whether the value fits on a single prologue line.
pub(crate) fn is_single_line(value: &str) -> bool {
    !value.contains(fields::is_line_break)
}

fn prologue_line(text: &str) -> &str {
    text.split_once(LINE_BREAK)
        .map_or(text, |(line, _remain)| line)
}

fn check_not_empty(text: &str) -> Result<(), MalformedMessageError> {
    if text.is_empty() {
        Err(MalformedMessageError::new(MalformedKind::EmptyInput))
    } else {
        Ok(())
    }
}

fn malformed_prologue(line: &str) -> MalformedMessageError {
    MalformedMessageError::new(MalformedKind::MalformedPrologue)
        .with_position(1)
        .with_snippet(line.chars().take(64).collect::<String>().escape_debug().to_string())
}
