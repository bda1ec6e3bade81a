//! Request dispatch
//!
//! A [`Kernel`] turns requests into responses by looking up a [`Handler`]
//! through a [`Router`]. Requests that match no route get a 404 response,
//! handlers that fail get a 500 response, and text that cannot be parsed
//! into a request gets a 400 response.
use std::collections::HashMap;

use crate::{
    error::MessageError,
    header::HeaderSet,
    message::{MessageParts, Scheme, SchemeVersion},
    request::Request,
    response::Response,
    status::StatusCode,
};

/// Produces a response for a routed request.
pub trait Handler: Send + Sync {
    fn handle(&self, request: &Request) -> Result<Response, MessageError>;
}

impl<F> Handler for F
where
    F: Fn(&Request) -> Result<Response, MessageError> + Send + Sync,
{
    fn handle(&self, request: &Request) -> Result<Response, MessageError> {
        self(request)
    }
}

/// Finds the handler for a request path.
pub trait Router {
    fn route(&self, path: &str) -> Option<&dyn Handler>;
}

/// Router matching paths exactly.
#[derive(Default)]
pub struct RouteTable {
    routes: HashMap<String, Box<dyn Handler>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, replacing any previous one for the same path.
    pub fn insert<P: Into<String>, H: Handler + 'static>(&mut self, path: P, handler: H) {
        self.routes.insert(path.into(), Box::new(handler));
    }

    pub fn with_route<P: Into<String>, H: Handler + 'static>(mut self, path: P, handler: H) -> Self {
        self.insert(path, handler);
        self
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Router for RouteTable {
    fn route(&self, path: &str) -> Option<&dyn Handler> {
        self.routes.get(path).map(|handler| handler.as_ref())
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteTable")
            .field("paths", &self.routes.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct KernelConfig {
    /// Body of the response sent when no route matches.
    pub not_found_body: String,
    /// Scheme version used for 400 responses, since there is no request to
    /// echo.
    pub bad_request_version: SchemeVersion,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            not_found_body: "Page Not Found".to_string(),
            bad_request_version: SchemeVersion::V1_1,
        }
    }
}

/// Converts requests into responses.
#[derive(Debug)]
pub struct Kernel<R: Router> {
    router: R,
    config: KernelConfig,
}

impl<R: Router> Kernel<R> {
    pub fn new(router: R) -> Self {
        Self::with_config(router, KernelConfig::default())
    }

    pub fn with_config(router: R, config: KernelConfig) -> Self {
        Self { router, config }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Dispatch a request to its handler.
    pub fn handle(&self, request: &Request) -> Response {
        let span = tracing::debug_span!("handle", method = %request.method(), path = request.path());
        let _guard = span.enter();

        let Some(handler) = self.router.route(request.path()) else {
            tracing::warn!("route not found");

            return self.error_response(
                StatusCode::NOT_FOUND,
                request.scheme(),
                request.scheme_version(),
                self.config.not_found_body.clone(),
            );
        };

        match handler.handle(request) {
            Ok(response) => {
                tracing::debug!(status_code = response.status_code().as_u16(), "handled");
                response
            }
            Err(error) => {
                tracing::warn!(%error, "handler failed");

                self.error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    request.scheme(),
                    request.scheme_version(),
                    String::new(),
                )
            }
        }
    }

    /// Parse request text and dispatch it.
    ///
    /// Text that does not make a valid request gets a 400 response whose
    /// body is the error description.
    pub fn handle_text(&self, text: &str) -> Response {
        match Request::parse(text) {
            Ok(request) => self.handle(&request),
            Err(error) => {
                tracing::warn!(%error, "bad request");

                self.error_response(
                    StatusCode::BAD_REQUEST,
                    Scheme::Http,
                    self.config.bad_request_version,
                    error.to_string(),
                )
            }
        }
    }

    fn error_response(
        &self,
        status_code: StatusCode,
        scheme: Scheme,
        scheme_version: SchemeVersion,
        body: String,
    ) -> Response {
        let parts = MessageParts::with_headers(scheme, scheme_version, HeaderSet::new(), body);

        Response::standard(status_code, parts)
    }
}
