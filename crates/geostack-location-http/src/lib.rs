//! restJson1 protocol layer for the geostack location client.
//!
//! This crate turns typed location inputs into HTTP requests and responses
//! back into typed outputs:
//!
//! - **Request**: binds members to the URI path, query string, headers, and
//!   JSON body as the shape schema says
//! - **Response**: decodes success bodies and dispatches error responses to
//!   typed service errors
//! - **Client**: validate, encode, send through an [`HttpTransport`], decode
//! - **Paginate**: follows continuation tokens across list operations
#![allow(missing_docs)]

pub mod body;
pub mod client;
pub mod error;
pub mod paginate;
pub mod request;
pub mod response;

pub use body::LocationBody;
pub use client::{HttpTransport, LocationClient, NotConnectedTransport, TransportFuture};
pub use error::{SdkError, TransportError};
pub use paginate::{PaginatedInput, PaginatedOutput, Paginator};
pub use request::encode_request;
pub use response::{FromLocationResponse, decode_error, decode_response};
