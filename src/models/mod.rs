use bson::oid::ObjectId;
use serde::Serializer;

pub mod city;
pub mod itinerary;
pub mod lenient;
pub mod place;
pub mod submission;

/// Writes a record's `_id` as its 24 character hex string, which is what
/// clients key rows and selections on.
pub(crate) fn serialize_hex_id<S>(id: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(id) => bson::serde_helpers::serialize_object_id_as_hex_string(id, serializer),
        None => serializer.serialize_none(),
    }
}
