use spotictl::utils::*;

#[test]
fn test_random_hex() {
    let hex = random_hex(SUBDOMAIN_LEN);

    // Should be exactly 10 characters
    assert_eq!(hex.len(), 10);

    // Should contain only lowercase hex digits
    assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

    // Should honor other lengths too
    assert_eq!(random_hex(32).len(), 32);
    assert!(random_hex(0).is_empty());
}

#[test]
fn test_random_hex_is_fresh() {
    // 40 bits of randomness; a collision here means the generator is broken
    let first = random_hex(SUBDOMAIN_LEN);
    let second = random_hex(SUBDOMAIN_LEN);
    assert_ne!(first, second);
}

#[test]
fn test_random_local_hostname() {
    let host = random_local_hostname("spotilocal.com");

    let (label, domain) = host.split_once('.').unwrap();
    assert_eq!(domain, "spotilocal.com");
    assert_eq!(label.len(), SUBDOMAIN_LEN);
    assert!(label.chars().all(|c| c.is_ascii_hexdigit()));

    // Each call picks a new label
    assert_ne!(host, random_local_hostname("spotilocal.com"));
}

#[test]
fn test_render_body_pretty_prints_json() {
    let rendered = render_body(br#"{"version":9,"running":true}"#);

    assert!(rendered.contains('\n'));
    assert!(rendered.contains("\"version\": 9"));
    assert!(rendered.contains("\"running\": true"));
}

#[test]
fn test_render_body_falls_back_to_text() {
    assert_eq!(render_body(b"not json at all"), "not json at all");

    // Invalid UTF-8 is replaced, not rejected
    let rendered = render_body(&[0x66, 0x6f, 0xff, 0x6f]);
    assert!(rendered.starts_with("fo"));
    assert!(rendered.ends_with('o'));
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0.0), "0:00");
    assert_eq!(format_duration(59.9), "0:59");
    assert_eq!(format_duration(61.0), "1:01");
    assert_eq!(format_duration(3725.0), "62:05");

    // Negative positions are clamped
    assert_eq!(format_duration(-3.0), "0:00");
}
