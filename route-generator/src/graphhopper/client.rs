//! GraphHopper HTTP client.

use std::time::Duration;

use reqwest::{Request, Url};

use crate::domain::{Coordinate, RoutePayload};
use crate::generator::RouteProvider;

use super::error::RouteError;

/// Default route endpoint of a locally running GraphHopper server.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8989/route";

/// Default locale for turn-by-turn instruction text.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Configuration for the GraphHopper client.
///
/// Everything here is fixed for the lifetime of a client; individual
/// requests only vary in their two points.
#[derive(Debug, Clone)]
pub struct GraphHopperConfig {
    /// Route endpoint URL
    pub base_url: String,
    /// Return path geometry as an encoded polyline instead of coordinate arrays
    pub points_encoded: bool,
    /// Include elevation as a third coordinate dimension
    pub elevation: bool,
    /// Locale of turn instructions (e.g. `en-US`, `de`)
    pub locale: String,
    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
}

impl GraphHopperConfig {
    /// Create a config pointing at the given endpoint.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Request encoded polylines.
    pub fn with_points_encoded(mut self, points_encoded: bool) -> Self {
        self.points_encoded = points_encoded;
        self
    }

    /// Request elevation data.
    pub fn with_elevation(mut self, elevation: bool) -> Self {
        self.elevation = elevation;
        self
    }

    /// Set the instruction locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for GraphHopperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT.to_string(),
            points_encoded: false,
            elevation: false,
            locale: DEFAULT_LOCALE.to_string(),
            timeout: None,
        }
    }
}

/// GraphHopper route API client.
#[derive(Debug, Clone)]
pub struct GraphHopperClient {
    http: reqwest::Client,
    endpoint: Url,
    points_encoded: bool,
    elevation: bool,
    locale: String,
}

impl GraphHopperClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GraphHopperConfig) -> Result<Self, RouteError> {
        let endpoint =
            Url::parse(&config.base_url).map_err(|e| RouteError::InvalidEndpoint {
                url: config.base_url.clone(),
                message: e.to_string(),
            })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            endpoint,
            points_encoded: config.points_encoded,
            elevation: config.elevation,
            locale: config.locale,
        })
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the GET request for a route from `from` to `to`.
    ///
    /// `point` appears twice, origin first. `type` is always `json`.
    pub fn build_request(&self, from: &Coordinate, to: &Coordinate) -> Result<Request, RouteError> {
        let request = self
            .http
            .get(self.endpoint.clone())
            .query(&[
                ("points_encoded", self.points_encoded.to_string()),
                ("elevation", self.elevation.to_string()),
                ("point", from.to_point_param()),
                ("point", to.to_point_param()),
                ("type", "json".to_string()),
                ("locale", self.locale.clone()),
            ])
            .build()?;

        Ok(request)
    }

    /// Fetch the route between two points.
    ///
    /// Returns the raw response body on a 2xx status.
    pub async fn get_path(
        &self,
        from: &Coordinate,
        to: &Coordinate,
    ) -> Result<RoutePayload, RouteError> {
        let request = self.build_request(from, to)?;
        let response = self.http.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouteError::Status {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(RoutePayload::new(body.to_vec()))
    }
}

impl RouteProvider for GraphHopperClient {
    async fn fetch(&self, from: &Coordinate, to: &Coordinate) -> Result<RoutePayload, RouteError> {
        self.get_path(from, to).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::Router;
    use axum::extract::RawQuery;
    use axum::http::StatusCode;
    use axum::routing::get;

    /// Serve `router` on an ephemeral local port, returning its `/route` URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/route")
    }

    fn query_pairs(request: &Request) -> Vec<(String, String)> {
        request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn config_builder() {
        let config = GraphHopperConfig::new("http://routing.example:8989/route")
            .with_points_encoded(true)
            .with_elevation(true)
            .with_locale("de")
            .with_timeout(Duration::from_secs(10));

        assert_eq!(config.base_url, "http://routing.example:8989/route");
        assert!(config.points_encoded);
        assert!(config.elevation);
        assert_eq!(config.locale, "de");
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn config_defaults() {
        let config = GraphHopperConfig::default();

        assert_eq!(config.base_url, DEFAULT_ENDPOINT);
        assert!(!config.points_encoded);
        assert!(!config.elevation);
        assert_eq!(config.locale, DEFAULT_LOCALE);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn invalid_endpoint_rejected() {
        let result = GraphHopperClient::new(GraphHopperConfig::new("not a url"));
        assert!(matches!(result, Err(RouteError::InvalidEndpoint { .. })));
    }

    #[test]
    fn request_carries_all_parameters_in_order() {
        let client = GraphHopperClient::new(GraphHopperConfig::default().with_locale("pt_PT"))
            .unwrap();
        let from = Coordinate::new(52.52, 13.405);
        let to = Coordinate::new(52.4, 13.1);

        let request = client.build_request(&from, &to).unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().path(), "/route");
        let expected = [
            ("points_encoded", "false"),
            ("elevation", "false"),
            ("point", "52.520000,13.405000"),
            ("point", "52.400000,13.100000"),
            ("type", "json"),
            ("locale", "pt_PT"),
        ];
        let pairs = query_pairs(&request);
        assert_eq!(pairs.len(), expected.len());
        for ((k, v), (ek, ev)) in pairs.iter().zip(expected) {
            assert_eq!(k, ek);
            assert_eq!(v, ev);
        }
    }

    #[test]
    fn request_reflects_flags() {
        let config = GraphHopperConfig::default()
            .with_points_encoded(true)
            .with_elevation(true);
        let client = GraphHopperClient::new(config).unwrap();
        let p = Coordinate::new(0.0, 0.0);

        let pairs = query_pairs(&client.build_request(&p, &p).unwrap());

        assert!(pairs.contains(&("points_encoded".into(), "true".into())));
        assert!(pairs.contains(&("elevation".into(), "true".into())));
    }

    #[tokio::test]
    async fn success_returns_body_verbatim() {
        let body = r#"{"paths":[{"points":{"coordinates":[[13.4,52.5],[13.1,52.4]]}}]}"#;
        let url = serve(Router::new().route("/route", get(move || async move { body }))).await;
        let client = GraphHopperClient::new(GraphHopperConfig::new(url)).unwrap();

        let payload = client
            .get_path(&Coordinate::new(52.5, 13.4), &Coordinate::new(52.4, 13.1))
            .await
            .unwrap();

        assert_eq!(payload.as_bytes(), body.as_bytes());
    }

    #[tokio::test]
    async fn server_sees_both_points() {
        let url = serve(Router::new().route(
            "/route",
            get(|RawQuery(query): RawQuery| async move { query.unwrap_or_default() }),
        ))
        .await;
        let client = GraphHopperClient::new(GraphHopperConfig::new(url)).unwrap();

        let payload = client
            .get_path(&Coordinate::new(1.0, 2.0), &Coordinate::new(3.0, 4.0))
            .await
            .unwrap();

        let echoed = String::from_utf8(payload.into_bytes()).unwrap();
        assert!(echoed.contains("point=1.000000%2C2.000000&point=3.000000%2C4.000000"));
        assert!(echoed.contains("type=json"));
    }

    #[tokio::test]
    async fn non_success_status_is_status_failure() {
        let url = serve(Router::new().route(
            "/route",
            get(|| async { (StatusCode::BAD_REQUEST, "Point 0 is out of bounds") }),
        ))
        .await;
        let client = GraphHopperClient::new(GraphHopperConfig::new(url)).unwrap();

        let err = client
            .get_path(&Coordinate::new(91.0, 0.0), &Coordinate::new(0.0, 0.0))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "graphhopper: 400 Bad Request");
    }

    #[tokio::test]
    async fn unreachable_server_is_transport_failure() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            GraphHopperClient::new(GraphHopperConfig::new(format!("http://{addr}/route")))
                .unwrap();

        let err = client
            .get_path(&Coordinate::new(0.0, 0.0), &Coordinate::new(1.0, 1.0))
            .await
            .unwrap_err();

        assert!(err.is_transport());
    }
}
