/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Anonymous users are identified by an opaque token string carried in a
/// signed cookie; the server never persists identities themselves.
pub type UserId = String;
