use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct ValidateIpRequest {
    pub ip: String,
}

#[derive(Serialize, Debug)]
pub struct ValidateIpResponse {
    pub status: bool,
}
