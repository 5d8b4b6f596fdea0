use spotictl::config::{DEFAULT_OAUTH_URL, DEFAULT_SPOTILOCAL_DOMAIN, DEFAULT_SPOTILOCAL_PORT, Overrides};
use spotictl::spotify::Endpoints;

#[test]
fn test_empty_file_keeps_defaults() {
    let overrides = Overrides::parse("").unwrap();
    assert_eq!(overrides, Overrides::default());

    let endpoints = Endpoints::from_overrides(&overrides);
    assert_eq!(endpoints, Endpoints::default());
    assert_eq!(endpoints.local_domain, DEFAULT_SPOTILOCAL_DOMAIN);
    assert_eq!(endpoints.local_port, DEFAULT_SPOTILOCAL_PORT);
    assert_eq!(endpoints.oauth_url, DEFAULT_OAUTH_URL);
}

#[test]
fn test_parse_overrides() {
    let overrides = Overrides::parse(
        "# local stand-in\nSPOTILOCAL_DOMAIN=localhost\nSPOTILOCAL_PORT=8099\nSPOTIFY_OAUTH_URL=http://127.0.0.1:8098/token\n",
    )
    .unwrap();

    assert_eq!(overrides.spotilocal_domain.as_deref(), Some("localhost"));
    assert_eq!(overrides.spotilocal_port, Some(8099));
    assert_eq!(
        overrides.spotify_oauth_url.as_deref(),
        Some("http://127.0.0.1:8098/token")
    );

    let endpoints = Endpoints::from_overrides(&overrides);
    assert_eq!(endpoints.local_domain, "localhost");
    assert_eq!(endpoints.local_port, 8099);
    assert_eq!(endpoints.oauth_url, "http://127.0.0.1:8098/token");
}

#[test]
fn test_partial_overrides() {
    let overrides = Overrides::parse("SPOTILOCAL_PORT=4380\n").unwrap();
    let endpoints = Endpoints::from_overrides(&overrides);

    assert_eq!(endpoints.local_port, 4380);
    assert_eq!(endpoints.local_domain, DEFAULT_SPOTILOCAL_DOMAIN);
    assert_eq!(endpoints.oauth_url, DEFAULT_OAUTH_URL);
}

#[test]
fn test_headers_are_not_configurable() {
    // Origin and User-Agent are fixed; such keys are ignored like any other
    let overrides =
        Overrides::parse("SPOTIFY_ORIGIN=https://evil.test\nSPOTIFY_USER_AGENT=curl\nOTHER=1\n")
            .unwrap();
    assert_eq!(overrides, Overrides::default());
}

#[test]
fn test_empty_values_are_ignored() {
    let overrides = Overrides::parse("SPOTILOCAL_DOMAIN=\nSPOTILOCAL_PORT=\n").unwrap();
    assert_eq!(overrides, Overrides::default());
}

#[test]
fn test_invalid_port_is_rejected() {
    let err = Overrides::parse("SPOTILOCAL_PORT=spotify\n").unwrap_err();
    assert!(err.contains("SPOTILOCAL_PORT"));

    assert!(Overrides::parse("SPOTILOCAL_PORT=70000\n").is_err());
}
