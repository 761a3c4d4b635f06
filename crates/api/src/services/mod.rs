//! Per-resource services orchestrating repositories and DTO mapping.

pub mod beers;
pub mod customers;

pub use beers::BeerService;
pub use customers::CustomerService;

use mongodb::bson::oid::ObjectId;

/// Parse an opaque wire id into a store key.
///
/// An id that is not a valid ObjectId can match no stored document, so the
/// caller treats `None` as an ordinary lookup miss rather than an error.
pub(crate) fn parse_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}
