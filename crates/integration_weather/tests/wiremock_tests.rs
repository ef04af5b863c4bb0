//! Integration tests for the OpenWeatherMap client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use std::time::Duration;

use integration_weather::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const TEST_KEY: &str = "test-key";

/// Sample direct geocoding response for "ikeja,lagos"
fn sample_geocode_response() -> serde_json::Value {
    serde_json::json!([
        {
            "name": "Lagos",
            "local_names": {"en": "Lagos", "yo": "Èkó"},
            "lat": 6.4550575,
            "lon": 3.3941795,
            "country": "NG",
            "state": "Lagos"
        },
        {
            "name": "Ikeja",
            "lat": 6.6018,
            "lon": 3.3515,
            "country": "NG",
            "state": "Lagos"
        }
    ])
}

/// Sample current weather response
fn sample_current_response() -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": 3.3515, "lat": 6.6018},
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
        "base": "stations",
        "main": {
            "temp": 303.15,
            "feels_like": 308.5,
            "temp_min": 303.15,
            "temp_max": 303.15,
            "pressure": 1010,
            "humidity": 70
        },
        "visibility": 10000,
        "wind": {"speed": 4.12, "deg": 230},
        "clouds": {"all": 75},
        "dt": 1705323600,
        "sys": {"country": "NG", "sunrise": 1705298000, "sunset": 1705340000},
        "timezone": 3600,
        "id": 2337639,
        "name": "Ikeja",
        "cod": 200
    })
}

/// Sample forecast response with two slots
fn sample_forecast_response() -> serde_json::Value {
    serde_json::json!({
        "cod": "200",
        "message": 0,
        "cnt": 2,
        "list": [
            {
                "dt": 1705323600,
                "main": {"temp": 302.0, "feels_like": 306.0, "humidity": 72},
                "weather": [{"id": 500, "main": "Rain", "description": "light rain"}],
                "wind": {"speed": 3.5, "deg": 220},
                "dt_txt": "2024-01-15 13:00:00"
            },
            {
                "dt": 1705334400,
                "main": {"temp": 300.0, "feels_like": 303.0, "humidity": 80},
                "weather": [{"id": 800, "main": "Clear", "description": "clear sky"}],
                "wind": {"speed": 2.0, "deg": 200},
                "dt_txt": "2024-01-15 16:00:00"
            }
        ],
        "city": {"id": 2337639, "name": "Ikeja", "country": "NG", "timezone": 3600}
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenWeatherMapClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        api_key: TEST_KEY.to_string(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    OpenWeatherMapClient::new(config).expect("Failed to create client")
}

/// Setup a mock for `endpoint` with the given response
async fn setup_mock(mock_server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_geocode_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .and(query_param("q", "ikeja,lagos"))
        .and(query_param("limit", "5"))
        .and(query_param("appid", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_geocode_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.geocode("ikeja,lagos", 5).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    let candidates = result.unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[1].name, "Ikeja");
    assert_eq!(candidates[1].state.as_deref(), Some("Lagos"));
    assert!((candidates[1].lat - 6.6018).abs() < 1e-9);
}

#[tokio::test]
async fn test_geocode_empty_result() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/geo/1.0/direct",
        ResponseTemplate::new(200).set_body_json(serde_json::json!([])),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.geocode("atlantis", 5).await;

    assert!(result.is_ok_and(|c| c.is_empty()));
}

#[tokio::test]
async fn test_geocode_limit_is_clamped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(client.geocode("lagos", 50).await.is_ok());
}

#[tokio::test]
async fn test_get_current_weather_success() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/data/2.5/weather",
        ResponseTemplate::new(200).set_body_json(sample_current_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current(6.6018, 3.3515).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    let weather = result.unwrap();
    assert!((weather.main.temp - 303.15).abs() < 0.01);
    assert_eq!(weather.main.humidity, 70);
    assert!((weather.wind.speed - 4.12).abs() < 0.01);
    assert_eq!(weather.condition(), "Clouds");
    assert_eq!(weather.name, "Ikeja");
    assert_eq!(weather.country(), "NG");
}

#[tokio::test]
async fn test_get_forecast_success() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/data/2.5/forecast",
        ResponseTemplate::new(200).set_body_json(sample_forecast_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast(6.6018, 3.3515).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    let forecast = result.unwrap();
    assert_eq!(forecast.list.len(), 2);
    assert_eq!(forecast.list[0].dt, 1_705_323_600);
    assert_eq!(forecast.list[0].condition(), "Rain");
    assert_eq!(forecast.city.name, "Ikeja");
}

#[tokio::test]
async fn test_request_contains_correct_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("lat", "6.455"))
        .and(query_param("lon", "3.3941"))
        .and(query_param("appid", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current(6.4550, 3.3941).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

// ============================================================================
// Error scenarios
// ============================================================================

#[tokio::test]
async fn test_unauthorized_error() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/data/2.5/weather",
        ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key."
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current(6.45, 3.39).await;

    assert!(
        matches!(result, Err(WeatherError::Unauthorized)),
        "Expected Unauthorized, got: {result:?}"
    );
}

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/data/2.5/forecast",
        ResponseTemplate::new(503),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast(6.45, 3.39).await;

    assert!(
        matches!(result, Err(WeatherError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    setup_mock(&mock_server, "/geo/1.0/direct", ResponseTemplate::new(429)).await;

    let client = create_test_client(&mock_server);
    let result = client.geocode("lagos", 5).await;

    assert!(
        matches!(result, Err(WeatherError::RateLimitExceeded)),
        "Expected RateLimitExceeded error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_not_found_is_request_failed() {
    let mock_server = MockServer::start().await;

    setup_mock(&mock_server, "/data/2.5/weather", ResponseTemplate::new(404)).await;

    let client = create_test_client(&mock_server);
    let result = client.get_current(6.45, 3.39).await;

    assert!(
        matches!(result, Err(WeatherError::RequestFailed(_))),
        "Expected RequestFailed error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/data/2.5/weather",
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current(6.45, 3.39).await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_missing_required_field_is_parse_error() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/data/2.5/forecast",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({"cod": "200"})),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast(6.45, 3.39).await;

    assert!(matches!(result, Err(WeatherError::ParseError(_))));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/data/2.5/weather",
        ResponseTemplate::new(200)
            .set_body_json(sample_current_response())
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let config = WeatherConfig {
        base_url: mock_server.uri(),
        api_key: TEST_KEY.to_string(),
        timeout_secs: 1,
    };
    let client = OpenWeatherMapClient::new(config).expect("client");
    let result = client.get_current(6.45, 3.39).await;

    assert!(
        matches!(result, Err(WeatherError::Timeout)),
        "Expected Timeout, got: {result:?}"
    );
}

// ============================================================================
// Validation scenarios
// ============================================================================

#[tokio::test]
async fn test_invalid_coordinates_never_hit_the_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);

    assert!(matches!(
        client.get_current(91.0, 0.0).await,
        Err(WeatherError::InvalidCoordinates)
    ));
    assert!(matches!(
        client.get_forecast(0.0, -181.0).await,
        Err(WeatherError::InvalidCoordinates)
    ));
}
