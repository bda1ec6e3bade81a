use httptext::{
    error::MessageError,
    kernel::{Kernel, RouteTable},
    message::{Scheme, SchemeVersion},
    request::Request,
    response::Response,
    status::StatusCode,
};

fn echo(request: &Request) -> Result<Response, MessageError> {
    let length = request.body().len().to_string();

    Response::with_standard_reason(
        StatusCode::OK,
        request.scheme(),
        request.scheme_version(),
        [("Content-Length", length.as_str())],
        request.body(),
    )
}

fn broken(_request: &Request) -> Result<Response, MessageError> {
    Response::new(
        StatusCode::OK,
        "OK",
        "HTTP",
        "1.1",
        [("Bad Header", "x")],
        "",
    )
}

fn kernel() -> Kernel<RouteTable> {
    Kernel::new(
        RouteTable::new()
            .with_route("/echo", echo)
            .with_route("/broken", broken),
    )
}

#[tracing_test::traced_test]
#[test]
fn test_dispatch() {
    let response = kernel().handle_text("POST /echo HTTPS/1.1\nHost: example.com\n\nping");

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.reason_phrase(), "OK");
    assert_eq!(response.scheme(), Scheme::Https);
    assert_eq!(response.scheme_version(), SchemeVersion::V1_1);
    assert_eq!(response.header("content-length"), Some("4"));
    assert_eq!(
        response.to_text(),
        "HTTPS/1.1 200 OK\nContent-Length: 4\n\nping"
    );
    assert!(logs_contain("handled"));
}

#[tracing_test::traced_test]
#[test]
fn test_not_found() {
    let response = kernel().handle_text("GET /nowhere HTTP/2.0\n\n");

    assert_eq!(
        response.to_text(),
        "HTTP/2.0 404 Not Found\n\nPage Not Found"
    );
    assert!(logs_contain("route not found"));
}

#[tracing_test::traced_test]
#[test]
fn test_handler_failure() {
    let response = kernel().handle_text("GET /broken HTTP/1.0\n\n");

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.reason_phrase(), "Internal Server Error");
    assert_eq!(response.scheme_version(), SchemeVersion::V1_0);
    assert!(logs_contain("handler failed"));
}

#[tracing_test::traced_test]
#[test]
fn test_bad_request() {
    let response = kernel().handle_text("GET /echo HTTP/3.0\n\n");

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.scheme(), Scheme::Http);
    assert!(response.body().starts_with("malformed message"));
    assert!(logs_contain("bad request"));

    let response = kernel().handle_text("FOO /echo HTTP/1.1\n\n");

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.body().starts_with("validation error"));
}
