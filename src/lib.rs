//! Plain-text HTTP/1.x messages.
//!
//! Requests and responses are validated values that convert to and from
//! their wire text:
//!
//! ```text
//! <PROLOGUE>\n
//! [<Name>: <value>\n]*
//! \n
//! [<body>]
//! ```
//!
//! ```
//! use httptext::{message::Message, request::Request};
//!
//! let text = "GET /users HTTP/1.1\nHost: example.com\n\n";
//! let request = Request::parse(text)?;
//!
//! assert_eq!(request.path(), "/users");
//! assert_eq!(request.header("host"), Some("example.com"));
//! assert_eq!(Message::from(request).to_text(), text);
//! # Ok::<(), httptext::error::MessageError>(())
//! ```
pub mod error;
pub mod header;
pub mod kernel;
pub mod message;
pub mod parse;
pub mod request;
pub mod response;
pub mod status;

#[cfg(feature = "bin")]
#[doc(hidden)]
pub mod app;
