/// Entity identifiers are opaque strings.
///
/// The local backend mints millisecond timestamps, the hosted backend hands
/// out its own keys; callers never interpret them.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
