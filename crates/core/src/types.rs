/// Opaque identifier for categories, questions and options.
///
/// Generated ids are UUIDv7 strings, but any string is accepted so that
/// seeded data can use short literal ids.
pub type EntityId = String;

/// Generate a fresh, time-ordered identifier.
pub fn new_id() -> EntityId {
    uuid::Uuid::now_v7().to_string()
}
