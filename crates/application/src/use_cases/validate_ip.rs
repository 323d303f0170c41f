use lookupd_domain::validators::is_valid_ipv4;

/// IPv4 syntax check. Stateless and idempotent: the same input always
/// yields the same answer.
#[derive(Default)]
pub struct ValidateIpUseCase;

impl ValidateIpUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, ip: &str) -> bool {
        is_valid_ipv4(ip)
    }
}
