/// Todo identifiers are opaque strings (UUID v4 when generated server-side).
pub type TodoId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
