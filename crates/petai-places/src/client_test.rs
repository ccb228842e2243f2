use super::*;

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 10, "ja", base_url)
        .expect("client construction should not fail")
}

#[test]
fn build_url_appends_language_and_key_last() {
    let client = test_client("https://places.example.com/api");
    let url = client.build_url("details/json", &[("place_id", "abc")]);
    assert_eq!(
        url.as_str(),
        "https://places.example.com/api/details/json?place_id=abc&language=ja&key=test-key"
    );
}

#[test]
fn build_url_normalises_trailing_slash() {
    let a = test_client("https://places.example.com/api/");
    let b = test_client("https://places.example.com/api");
    assert_eq!(
        a.build_url("nearbysearch/json", &[]).as_str(),
        b.build_url("nearbysearch/json", &[]).as_str()
    );
}

#[test]
fn build_url_encodes_keyword() {
    let client = test_client("https://places.example.com");
    let url = client.build_url("nearbysearch/json", &[("keyword", "ペット カフェ")]);
    assert!(
        !url.as_str().contains(' '),
        "keyword should be percent-encoded: {url}"
    );
    let keyword = url
        .query_pairs()
        .find(|(k, _)| k == "keyword")
        .map(|(_, v)| v.into_owned());
    assert_eq!(keyword.as_deref(), Some("ペット カフェ"));
}

#[test]
fn photo_url_includes_width_reference_and_key() {
    let client = test_client("https://places.example.com/api");
    let url = client.photo_url("ref-123", 400);
    assert_eq!(
        url,
        "https://places.example.com/api/photo?maxwidth=400&photo_reference=ref-123&key=test-key"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = PlacesClient::with_base_url("k", 10, "ja", "not a url");
    assert!(matches!(result, Err(PlacesError::InvalidBaseUrl { .. })));
}

#[test]
fn new_targets_the_configured_default_base_url() {
    let client = PlacesClient::new("test-key", 10, "ja").expect("client");
    let url = client.build_url("nearbysearch/json", &[]);
    assert!(url
        .as_str()
        .starts_with(&format!("{DEFAULT_PLACES_BASE_URL}nearbysearch/json?")));
}
