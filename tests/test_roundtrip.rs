use httptext::{
    message::{Message, MessageKind},
    parse::{detect_kind, parse},
    request::Request,
    response::Response,
};

mod message_generator;

#[tracing_test::traced_test]
#[test]
fn test_request_roundtrip() {
    for request in message_generator::generate_requests(200) {
        let text = request.to_text();
        let parsed = Request::parse(&text).unwrap();

        assert_eq!(parsed, request, "{:?}", text);
        assert_eq!(parsed.to_text(), text);
    }
}

#[tracing_test::traced_test]
#[test]
fn test_response_roundtrip() {
    for response in message_generator::generate_responses(200) {
        let text = response.to_text();
        let parsed = Response::parse(&text).unwrap();

        assert_eq!(parsed, response, "{:?}", text);
        assert_eq!(parsed.to_text(), text);
    }
}

#[tracing_test::traced_test]
#[test]
fn test_detect_kind() {
    for message in message_generator::generate_messages(50) {
        let text = message.to_text();

        assert_eq!(detect_kind(&text), message.kind());
        assert_eq!(Message::parse(&text).unwrap(), message);
    }
}

#[test]
fn test_serialize_bytes() {
    for message in message_generator::generate_messages(20) {
        let mut buf = Vec::new();
        message.serialize(&mut buf).unwrap();

        assert_eq!(buf, message.to_text().into_bytes());
    }
}

#[test]
fn test_headers_keep_order() {
    for message in message_generator::generate_messages(20) {
        let text = message.to_text();
        let parsed = Message::parse(&text).unwrap();

        let names = parsed
            .headers()
            .iter()
            .map(|header| header.name())
            .collect::<Vec<_>>();
        let expected = message
            .headers()
            .iter()
            .map(|header| header.name())
            .collect::<Vec<_>>();

        assert_eq!(names, expected);
    }
}

#[test]
fn test_wrong_kind() {
    let request = message_generator::generate_requests(1).remove(0);
    let text = request.to_text();

    let error = parse(&text, MessageKind::Response).unwrap_err();
    assert!(error.is_malformed());

    let response = message_generator::generate_responses(1).remove(0);
    let text = response.to_text();

    let error = parse(&text, MessageKind::Request).unwrap_err();
    assert!(error.is_malformed());
}

#[test]
fn test_body_with_blank_lines() {
    let text = "POST /submit HTTP/1.1\nContent-Type: text/plain\n\nfirst\n\nsecond\n\n";
    let request = Request::parse(text).unwrap();

    assert_eq!(request.body(), "first\n\nsecond\n\n");
    assert_eq!(request.to_text(), text);
}
