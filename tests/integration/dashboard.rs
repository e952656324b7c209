//! Dashboard-style queries through the facade crate.

use super::common::{client, features_body, layer_url, serve, LAYER_PATH};
use arcgis_query::{FeatureQuery, FieldValue, ResultSet};
use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_district_figures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LAYER_PATH))
        .and(query_param("where", "GEMEINDE = '(gesamter Kreis)'"))
        .and(query_param("outFields", "BE_AKTUELL,BE_VORTAG,ST_AKTUELL"))
        .and(query_param("returnGeometry", "false"))
        .and(query_param("outSR", "4326"))
        .and(query_param("f", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(features_body([json!({
            "BE_AKTUELL": 10480,
            "BE_VORTAG": 10452,
            "ST_AKTUELL": 57.3
        })])))
        .expect(1)
        .mount(&server)
        .await;

    let district = client()
        .fetch(
            &FeatureQuery::new(layer_url(&server))
                .out_fields(["BE_AKTUELL", "BE_VORTAG", "ST_AKTUELL"])
                .filter(("GEMEINDE", "=", "(gesamter Kreis)")),
        )
        .await
        .expect("District query should succeed");

    let record = district.single().expect("Expected a single district record");
    let change = record.get_i64("BE_AKTUELL").unwrap() - record.get_i64("BE_VORTAG").unwrap();
    assert_eq!(change, 28);
    assert_eq!(record.get_f64("ST_AKTUELL"), Some(57.3));
}

#[tokio::test]
async fn test_refresh_timestamp() {
    let server = MockServer::start().await;
    serve(
        &server,
        features_body([json!({"DATUM": 1_614_600_000_000i64})]),
    )
    .await;

    let refresh = client()
        .fetch(
            &FeatureQuery::new(layer_url(&server))
                .out_fields(["DATUM"])
                .date_fields(["DATUM"]),
        )
        .await
        .expect("Refresh query should succeed");

    let expected = NaiveDate::from_ymd_opt(2021, 3, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    assert_eq!(
        refresh.single().and_then(|r| r.get("DATUM")),
        Some(&FieldValue::DateTime(expected))
    );
}

#[tokio::test]
async fn test_date_filter_rendering() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LAYER_PATH))
        .and(query_param(
            "where",
            "Meldedatum >= DATE '2021-03-01 00:00:00' AND Landkreis = 'LK Paderborn'",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(features_body([
            json!({"AnzahlFall": 4}),
            json!({"AnzahlFall": 9}),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let cases = client()
        .fetch(
            &FeatureQuery::new(layer_url(&server))
                .filter((
                    "Meldedatum",
                    ">=",
                    NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
                ))
                .filter(("Landkreis", "=", "LK Paderborn")),
        )
        .await
        .expect("Filtered query should succeed");

    assert!(matches!(cases, ResultSet::Many(ref records) if records.len() == 2));
    let total: i64 = cases.records().iter().filter_map(|r| r.get_i64("AnzahlFall")).sum();
    assert_eq!(total, 13);
}

#[tokio::test]
async fn test_result_serializes_like_attributes() {
    let server = MockServer::start().await;
    serve(&server, features_body([json!({"AnzahlFall": 2_345_678})])).await;

    let result = client()
        .fetch(&FeatureQuery::new(layer_url(&server)).filter("NeuerFall IN(1,-1)"))
        .await
        .expect("Statistics query should succeed");

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"AnzahlFall": 2_345_678})
    );
}
