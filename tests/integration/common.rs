use arcgis_query::{ClientConfig, FeatureServiceClient};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Layer path used by every mock service.
pub const LAYER_PATH: &str = "/arcgis/rest/services/Dashboard/FeatureServer/0/query";

pub fn layer_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), LAYER_PATH)
}

pub fn client() -> FeatureServiceClient {
    let config = ClientConfig::builder()
        .with_timeout(std::time::Duration::from_secs(5))
        .build();
    FeatureServiceClient::with_config(config).expect("Failed to create client")
}

/// A query response body holding one feature per attribute object.
pub fn features_body(attributes: impl IntoIterator<Item = Value>) -> Value {
    let features: Vec<Value> = attributes
        .into_iter()
        .map(|attributes| json!({ "attributes": attributes }))
        .collect();
    json!({ "features": features })
}

/// Answer every request to the layer with the same body.
pub async fn serve(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(LAYER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
