//! Location service model types for geostack.
//!
//! Hand-written shapes for every operation of the location service (trackers,
//! geofence collections, maps, place indexes, route calculators, and tagging),
//! the operation catalogue, a static schema describing how each member is
//! bound to the HTTP message, and constraint validation driven by that schema.
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod batch;
pub mod blob;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod schema;
pub mod types;
pub mod validate;

pub use blob::Blob;
pub use error::{LocationError, LocationErrorCode};
pub use operations::{LocationInput, LocationOperation};
pub use schema::Shape;
pub use validate::{ConstraintViolation, validate};
