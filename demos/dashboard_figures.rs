//! COVID-19 dashboard figures from public ArcGIS services
//!
//! This demo fetches:
//! 1. The nationwide sum of new cases (an `outStatistics` aggregate query)
//! 2. The district figures of Kreis Paderborn (a filtered attribute query)
//! 3. The time of the district's last data refresh (a date field)
//!
//! Set `ARCGIS_TOKEN` when the district services require a token.
//! Use `RUST_LOG=arcgis_query_feature=debug` to see every page request.
//!
//! Run with: cargo run --example dashboard_figures

use arcgis_query::{FeatureQuery, FeatureServiceClient, ResultSet};
use chrono::Utc;
use serde_json::json;
use tracing_subscriber::EnvFilter;

const RKI_CASES: &str =
    "https://services7.arcgis.com/mOBPykOjAyBO2ZKk/arcgis/rest/services/RKI_COVID19/FeatureServer/0/query";

const PADERBORN_DISTRICT: &str =
    "https://utility.arcgis.com/usrsvcs/servers/9020e4c3f15b40a6807cf282504e26f2/rest/services/secure/KPB_CoronaDashboard_Prod_Secure/MapServer/4/query";

const PADERBORN_REFRESH: &str =
    "https://utility.arcgis.com/usrsvcs/servers/9020e4c3f15b40a6807cf282504e26f2/rest/services/secure/KPB_CoronaDashboard_Prod_Secure/MapServer/5/query";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = FeatureServiceClient::new()?;
    let token = std::env::var("ARCGIS_TOKEN").ok();

    println!("=== COVID-19 ===\n");

    // Nationwide: the statistics query answers with a single feature.
    let rki = client
        .fetch(
            &FeatureQuery::new(RKI_CASES)
                .out_fields(["AnzahlFall"])
                .filter("NeuerFall IN(1,-1)")
                .param(
                    "outStatistics",
                    json!([{
                        "statisticType": "sum",
                        "onStatisticField": "AnzahlFall",
                        "outStatisticFieldName": "AnzahlFall"
                    }]),
                ),
        )
        .await?;

    println!("Deutschland");
    match rki.single().and_then(|r| r.get_i64("AnzahlFall")) {
        Some(cases) => println!("  Neue Fälle: {}", cases),
        None => println!("  Neue Fälle: n/a"),
    }

    // District totals
    let mut district = FeatureQuery::new(PADERBORN_DISTRICT)
        .out_fields(["BE_AKTUELL", "BE_VORTAG", "ST_AKTUELL"])
        .filter(("GEMEINDE", "=", "(gesamter Kreis)"));
    if let Some(token) = &token {
        district = district.param("token", token.as_str());
    }
    let district = client.fetch(&district).await?;

    println!("\nPaderborn");
    print_district(&district);

    // Last refresh of the district dashboard
    let mut refresh = FeatureQuery::new(PADERBORN_REFRESH)
        .out_fields(["DATUM"])
        .date_fields(["DATUM"]);
    if let Some(token) = &token {
        refresh = refresh.param("token", token.as_str());
    }
    let refresh = client.fetch(&refresh).await?;

    if let Some(updated) = refresh.single().and_then(|r| r.get_datetime("DATUM")) {
        let hours = (Utc::now().naive_utc() - updated).num_hours();
        println!("  Aktualisierung: Vor {} h ({})", hours, updated);
    }

    Ok(())
}

fn print_district(district: &ResultSet) {
    let Some(record) = district.single() else {
        println!("  expected one district record, got {}", district.len());
        return;
    };

    let current = record.get_i64("BE_AKTUELL");
    let previous = record.get_i64("BE_VORTAG");
    if let (Some(current), Some(previous)) = (current, previous) {
        println!("  Neue Fälle: {}", current - previous);
    }
    if let Some(incidence) = record.get_f64("ST_AKTUELL") {
        println!("  Inzidenz: {:.1}", incidence);
    }
}
