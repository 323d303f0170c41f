use std::net::Ipv4Addr;
use std::str::FromStr;
use url::Url;

/// Maximum hostname length per RFC 1035.
const MAX_DOMAIN_LEN: usize = 253;

/// Checks that `input` is syntactically a valid hostname.
///
/// The accepted grammar is "parses as the host component of a URL": the
/// string is prefixed with `http://` and must parse to a URL whose host is
/// exactly the input. Anything that smuggles a port, path, query, fragment
/// or userinfo past the host is rejected.
pub fn is_valid_domain(input: &str) -> bool {
    if input.is_empty() || input.len() > MAX_DOMAIN_LEN {
        return false;
    }
    if input.contains(|c: char| {
        c.is_whitespace() || matches!(c, '/' | '?' | '#' | '@' | ':' | '\\')
    }) {
        return false;
    }

    match Url::parse(&format!("http://{input}")) {
        Ok(url) => url
            .host_str()
            .is_some_and(|host| host.eq_ignore_ascii_case(input)),
        Err(_) => false,
    }
}

/// Checks that `input` is a canonical dotted-quad IPv4 literal.
///
/// Four decimal octets 0-255, no leading zeros, no IPv6, no whitespace.
/// Delegates to the standard library parser, which enforces all of these.
pub fn is_valid_ipv4(input: &str) -> bool {
    Ipv4Addr::from_str(input).is_ok()
}
