//! Wire splitting for protobuf-encoded messages.
//!
//! Responsibilities:
//! - Define wire types, tags and raw field records
//! - Partition a buffer span into records, in order, with strict bounds checks
//!
//! Non-responsibilities:
//! - Schemas, field names, defaults
//! - Interpreting values (scalars, nested messages, repeated fields)
//! - Groups (wire types 3/4 are rejected)

pub mod types;
pub mod split;

pub use types::{Record, Tag, WireType};
pub use split::{split_all, split_buffer, Splitter};
