//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.0 subset: one request per connection, no
//! keep-alive, no chunked encoding.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection pipeline (read, dispatch, respond, close)
//! - **`parser`**: parses a request from an accumulated byte buffer
//! - **`request`**: verb enumeration and parsed-request representation
//! - **`response`**: status codes and response construction
//! - **`writer`**: serializes and writes a response to the client
//!
//! # Request pipeline
//!
//! Each connection runs one pass of:
//!
//! ```text
//! Reading → Processing → Writing → Closed
//! ```
//!
//! Reading accumulates bytes until the parser yields a request (or the
//! peer closes without sending one, in which case the connection is
//! abandoned silently). Processing hands the request to the page
//! dispatcher, which always produces a response. Writing drains the
//! serialized response, then the socket is dropped.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
