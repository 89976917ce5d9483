//! InatClient tests against a mock API server.

use httpmock::prelude::*;
use inat_client::{InatClient, InatConfig, InatError};

fn client_for(server: &MockServer) -> InatClient {
    let config = InatConfig::builder()
        .base_url(server.base_url())
        .user_agent("inat-client-tests")
        .build();
    InatClient::new(config).unwrap()
}

fn taxon_json(id: u64, name: &str, common: Option<&str>, iconic: &str) -> serde_json::Value {
    let mut taxon = serde_json::json!({
        "id": id,
        "name": name,
        "rank": "species",
        "iconic_taxon_name": iconic,
    });
    if let Some(common) = common {
        taxon["preferred_common_name"] = serde_json::Value::String(common.to_string());
    }
    taxon
}

#[tokio::test]
async fn search_taxa_sends_animal_filters_and_preserves_order() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/taxa")
            .query_param("q", "goat")
            .query_param("per_page", "20")
            .query_param("is_active", "true")
            .query_param("iconic_taxa", "Animalia");
        then.status(200).json_body(serde_json::json!({
            "total_results": 2,
            "results": [
                taxon_json(1, "Capra hircus", Some("Domestic Goat"), "Mammalia"),
                taxon_json(2, "Capra aegagrus", Some("Wild Goat"), "Mammalia"),
            ]
        }));
    });

    let client = client_for(&server);
    let taxa = client.search_taxa("goat", 20).await.unwrap();

    mock.assert();
    assert_eq!(taxa.len(), 2);
    assert_eq!(taxa[0].name, "Capra hircus");
    assert_eq!(taxa[1].name, "Capra aegagrus");
}

#[tokio::test]
async fn search_taxa_drops_non_animal_iconic_taxa() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/taxa");
        then.status(200).json_body(serde_json::json!({
            "total_results": 4,
            "results": [
                taxon_json(1, "Amanita muscaria", Some("Fly Agaric"), "Fungi"),
                taxon_json(2, "Capra hircus", Some("Domestic Goat"), "Mammalia"),
                taxon_json(3, "Quercus robur", Some("English Oak"), "Plantae"),
                taxon_json(4, "Paramecium caudatum", None, "Protozoa"),
            ]
        }));
    });

    let client = client_for(&server);
    let taxa = client.search_taxa("anything", 20).await.unwrap();

    assert_eq!(taxa.len(), 1);
    assert_eq!(taxa[0].name, "Capra hircus");
}

#[tokio::test]
async fn search_taxa_keeps_taxa_without_iconic_name() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/taxa");
        then.status(200).json_body(serde_json::json!({
            "total_results": 1,
            "results": [{"id": 9, "name": "Incertae sedis"}]
        }));
    });

    let client = client_for(&server);
    let taxa = client.search_taxa("mystery", 10).await.unwrap();
    assert_eq!(taxa.len(), 1);
}

#[tokio::test]
async fn search_taxa_truncates_to_limit_after_filtering() {
    let server = MockServer::start();

    let results: Vec<_> = (1..=10)
        .map(|i| taxon_json(i, &format!("Species {i}"), None, "Mammalia"))
        .collect();
    server.mock(|when, then| {
        when.method(GET).path("/taxa");
        then.status(200)
            .json_body(serde_json::json!({"total_results": 10, "results": results}));
    });

    let client = client_for(&server);
    let taxa = client.search_taxa("many", 3).await.unwrap();
    assert_eq!(taxa.len(), 3);
    assert_eq!(taxa[0].id, 1);
}

#[tokio::test]
async fn search_taxa_empty_results() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/taxa");
        then.status(200)
            .json_body(serde_json::json!({"total_results": 0, "results": []}));
    });

    let client = client_for(&server);
    let taxa = client.search_taxa("xyzzy", 20).await.unwrap();
    assert!(taxa.is_empty());
}

#[tokio::test]
async fn observations_request_shape_and_decode() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/observations")
            .query_param("taxon_id", "42069")
            .query_param("photos", "true")
            .query_param("quality_grade", "research")
            .query_param("per_page", "100")
            .query_param("order_by", "random");
        then.status(200).json_body(serde_json::json!({
            "total_results": 1,
            "results": [{
                "id": 555,
                "place_guess": "Crete, Greece",
                "observed_on_string": "2023-09-12",
                "user": {"login": "kri-naturalist"},
                "photos": [{"url": "https://static.inaturalist.org/photos/9/square.jpeg"}],
                "taxon": {"id": 42069, "name": "Capra aegagrus", "preferred_common_name": "Wild Goat"}
            }]
        }));
    });

    let client = client_for(&server);
    let observations = client.observations_for_taxon(42069).await.unwrap();

    mock.assert();
    assert_eq!(observations.len(), 1);
    let obs = &observations[0];
    assert_eq!(obs.user.login, "kri-naturalist");
    assert_eq!(obs.permalink(), "https://www.inaturalist.org/observations/555");
    assert_eq!(
        obs.photos[0].medium_url(),
        "https://static.inaturalist.org/photos/9/medium.jpeg"
    );
}

#[tokio::test]
async fn observations_empty_pool() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/observations");
        then.status(200)
            .json_body(serde_json::json!({"total_results": 0, "results": []}));
    });

    let client = client_for(&server);
    let observations = client.observations_for_taxon(1).await.unwrap();
    assert!(observations.is_empty());
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/taxa");
        then.status(500).body("upstream exploded");
    });

    let client = client_for(&server);
    let err = client.search_taxa("goat", 20).await.unwrap_err();
    match err {
        InatError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_an_http_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/observations");
        then.status(200).body("not json");
    });

    let client = client_for(&server);
    let err = client.observations_for_taxon(1).await.unwrap_err();
    assert!(matches!(err, InatError::Http(_)));
}
