use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Global project settings. Exactly one record exists per project; saves
/// replace it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub global_key: String,
    pub database_type: String,
    pub auth_type: String,
    pub timezone: String,
    pub db_host: String,
    pub db_port: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
}

impl Settings {
    /// Generate the default settings record. The current time is injected by
    /// the caller so default generation stays deterministic and testable.
    pub fn generated(now: DateTime<Utc>) -> Self {
        Self {
            global_key: format!("key_{}", now.timestamp_millis()),
            database_type: "mysql".to_string(),
            auth_type: "session".to_string(),
            timezone: "UTC".to_string(),
            db_host: "localhost".to_string(),
            db_port: "3306".to_string(),
            db_user: "root".to_string(),
            db_password: "root".to_string(),
            db_name: format!("database_{}", now.format("%Y-%m-%d")),
        }
    }
}
