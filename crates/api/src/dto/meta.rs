use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct AppDetails {
    pub version: String,
    /// Current UNIX epoch seconds at response time.
    pub date: i64,
    pub kubernetes: bool,
}

#[derive(Serialize, Debug)]
pub struct HealthCheck {
    pub status: &'static str,
}

impl HealthCheck {
    pub fn ok() -> Self {
        Self { status: "OK" }
    }
}
