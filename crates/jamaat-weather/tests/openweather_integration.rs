//! Integration tests for WeatherProvider using wiremock.

use jamaat_core::Config;
use jamaat_geo::{Coordinates, GeoClient, Location};
use jamaat_weather::{WeatherError, WeatherProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.services.openweather_url = server.uri();
    config.services.openweather_api_key = "test_key".to_string();
    config
}

#[tokio::test]
async fn test_temperature_with_coordinates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "33.64"))
        .and(query_param("lon", "75.02"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "main": { "temp": 17.6, "humidity": 55 },
            "name": "Kulgam"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let provider = WeatherProvider::new(&config).unwrap();
    let geo = GeoClient::new(&config).unwrap();
    let loc = Location {
        postal_code: Some("192231".to_string()),
        city_label: "Kulgam".to_string(),
        coordinates: Some(Coordinates {
            latitude: 33.64,
            longitude: 75.02,
        }),
    };

    let temp = provider.temperature_for(&loc, &geo).await.unwrap();
    assert_eq!(temp, Some(18));
}

#[tokio::test]
async fn test_temperature_geocodes_city_first() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .and(query_param("q", "Srinagar,IN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "name": "Srinagar", "lat": 34.08, "lon": 74.79 }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "34.08"))
        .and(query_param("lon", "74.79"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "main": { "temp": 9.2 }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let provider = WeatherProvider::new(&config).unwrap();
    let geo = GeoClient::new(&config).unwrap();
    let loc = Location {
        postal_code: None,
        city_label: "Srinagar".to_string(),
        coordinates: None,
    };

    let temp = provider.temperature_for(&loc, &geo).await.unwrap();
    assert_eq!(temp, Some(9));
}

#[tokio::test]
async fn test_city_not_found_is_geo_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let provider = WeatherProvider::new(&config).unwrap();
    let geo = GeoClient::new(&config).unwrap();
    let loc = Location {
        postal_code: None,
        city_label: "Atlantis".to_string(),
        coordinates: None,
    };

    let err = provider.temperature_for(&loc, &geo).await.unwrap_err();
    assert!(matches!(err, WeatherError::Geo(_)));
}

#[tokio::test]
async fn test_missing_temp_field_yields_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "weather": [{ "id": 800 }]
        })))
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let provider = WeatherProvider::new(&config).unwrap();
    let weather = provider
        .fetch_current(Coordinates {
            latitude: 1.0,
            longitude: 2.0,
        })
        .await
        .unwrap();

    assert_eq!(weather.rounded_temperature(), None);
}
