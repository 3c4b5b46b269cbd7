// Standardized error codes for API responses and logs

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
    pub const MISSING_REQUIRED_FIELD: &str = "VALIDATION_1002";
    pub const INVALID_FORMAT: &str = "VALIDATION_1003";
}

pub mod authentication {
    pub const MISSING_IDENTITY: &str = "AUTH_2001";
}

pub mod database {
    pub const CONNECTION_FAILED: &str = "DB_4001";
    pub const QUERY_FAILED: &str = "DB_4002";
    pub const MIGRATION_FAILED: &str = "DB_4003";
}

pub mod prediction {
    pub const INVALID_KEYWORD_MODEL: &str = "PREDICT_5001";
    pub const REFERENCE_UNAVAILABLE: &str = "PREDICT_5002";
}

pub mod system {
    pub const CONFIGURATION: &str = "SYS_9001";
    pub const NETWORK: &str = "SYS_9002";
    pub const SERVER: &str = "SYS_9003";
    pub const INTERNAL: &str = "SYS_9999";
}
