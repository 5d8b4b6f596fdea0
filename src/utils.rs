use rand::Rng;

/// Length of the random label put in front of the SpotiLocal domain.
pub const SUBDOMAIN_LEN: usize = 10;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Returns a fresh string of `len` lowercase hex characters.
pub fn random_hex(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| char::from(HEX_DIGITS[rng.random_range(0..HEX_DIGITS.len())]))
        .collect()
}

/// Random hostname under `domain`, e.g. `3f9a0c1b2e.spotilocal.com`.
///
/// Every URL gets a new label to get around the DNS pinning protection of
/// the desktop client. The wildcard record resolves to loopback whatever
/// the label is.
pub fn random_local_hostname(domain: &str) -> String {
    format!("{}.{}", random_hex(SUBDOMAIN_LEN), domain)
}

/// Renders a response body for the terminal.
///
/// JSON bodies are pretty-printed, anything else is shown as (lossy) UTF-8
/// text.
pub fn render_body(body: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(json) => {
            serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
        }
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}

/// Formats a position in seconds as `m:ss`.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
