/// All database primary keys are PostgreSQL BIGINT.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Fixed row id used by singleton resources (site settings, about, contact).
pub const SINGLETON_ID: DbId = 1;
