pub const DEFAULT_RUST_LOG: &str = "info";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://softuni.db?mode=rwc";
pub const DEFAULT_DB_MAX_CONNECTIONS: i64 = 10;
pub const DEFAULT_DB_MIN_IDLE: i64 = 1;
