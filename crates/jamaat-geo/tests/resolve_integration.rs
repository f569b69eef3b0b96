//! Integration tests for location resolution using wiremock.

use jamaat_core::Config;
use jamaat_geo::{GeoClient, GeoError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GeoClient {
    let mut config = Config::default();
    config.services.openweather_url = server.uri();
    config.services.nominatim_url = server.uri();
    config.services.openweather_api_key = "test_key".to_string();
    GeoClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_resolve_pin_uses_provider_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/zip"))
        .and(query_param("zip", "192231,IN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "zip": "192231",
            "name": "Kulgam District",
            "lat": 33.64,
            "lon": 75.02,
            "country": "IN"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let loc = client.resolve("Kulgam 192231").await.unwrap();

    assert_eq!(loc.postal_code.as_deref(), Some("192231"));
    assert_eq!(loc.city_label, "Kulgam District");
    let coords = loc.coordinates.unwrap();
    assert_eq!(coords.latitude, 33.64);
    assert_eq!(coords.longitude, 75.02);
}

#[tokio::test]
async fn test_resolve_pin_without_name_falls_back_to_parsed_label() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/zip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "lat": 34.08,
            "lon": 74.79
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let loc = client.resolve("Srinagar 190001, India").await.unwrap();

    assert_eq!(loc.city_label, "Srinagar");
    assert_eq!(loc.display_label(), "Srinagar (190001)");
}

#[tokio::test]
async fn test_resolve_pin_failure_is_resolution_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/zip"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "not found"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.resolve("999999").await.unwrap_err();

    assert!(matches!(err, GeoError::Resolution(_)));
    assert_eq!(err.to_string(), "PIN geocoding failed");
}

#[tokio::test]
async fn test_lookup_city_returns_first_match() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .and(query_param("q", "Anantnag,IN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "name": "Anantnag", "lat": 33.73, "lon": 75.15, "country": "IN" }
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let coords = client.lookup_city("Anantnag").await.unwrap();

    assert_eq!(coords.latitude, 33.73);
    assert_eq!(coords.longitude, 75.15);
}

#[tokio::test]
async fn test_lookup_city_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.lookup_city("Anantnag").await.unwrap_err();

    assert_eq!(err.to_string(), "City geocoding failed");
}

#[tokio::test]
async fn test_search_places_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.search_places("Kulgam").await;

    assert!(result.is_err());
}
