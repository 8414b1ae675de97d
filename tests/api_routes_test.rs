use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt;

use livetv_catalog::{
    catalog::CatalogStore,
    config::CatalogConfig,
    web::{create_router, AppState},
};

// Helper function to send requests to the app
async fn send_request(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json: Value = if body_bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(json!({}))
    };

    (status, json)
}

fn write_json(path: &Path, value: &Value) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn channel(id: &str, name: &str, country: &str) -> Value {
    json!({
        "nanoid": id,
        "name": name,
        "iptv_urls": [format!("https://streams.example.com/{}.m3u8", id)],
        "youtube_urls": [],
        "language": "eng",
        "country": country,
        "isGeoBlocked": false
    })
}

struct Fixture {
    _dir: TempDir,
    config: CatalogConfig,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::rooted_at(dir.path());

        write_json(
            &config.countries_path.join("fr.json"),
            &json!([
                channel("fr1", "France 24", "fr"),
                channel("fr2", "Arte", "fr"),
                channel("fr3", "Franceinfo", "fr"),
            ]),
        );
        write_json(
            &config.countries_path.join("gb.json"),
            &json!([
                channel("gb1", "BBC News", "gb"),
                channel("gb2", "Sky Sports Racing", "gb"),
                channel("gb3", "Cartoonito", "gb"),
            ]),
        );
        write_json(
            &config.categories_path.join("news.json"),
            &json!([channel("n1", "Legacy News", "us")]),
        );
        std::fs::write(config.categories_path.join("broken.json"), "[{ oops").unwrap();
        write_json(
            &config.aggregate_path(),
            &json!([
                channel("a1", "Eurosport 1", "fr"),
                channel("a2", "Arte", "fr"),
                channel("a3", "SPORT TV", "pt"),
                channel("a4", "BBC News", "gb"),
            ]),
        );
        write_json(
            &config.metadata_path,
            &json!({
                "FR": { "country": "France", "capital": "Paris", "timeZone": "Europe/Paris", "hasChannels": true },
                "GB": { "country": "United Kingdom", "capital": "London", "timeZone": "Europe/London", "hasChannels": true },
                "AQ": { "country": "Antarctica", "capital": "", "timeZone": "", "hasChannels": false }
            }),
        );

        Self { _dir: dir, config }
    }

    async fn app(&self) -> Router {
        let catalog = CatalogStore::open(&self.config).await;
        create_router(AppState::new(catalog))
    }

    async fn app_with_state(&self) -> (Router, CatalogStore) {
        let catalog = CatalogStore::open(&self.config).await;
        (create_router(AppState::new(catalog.clone())), catalog)
    }
}

fn ids(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|c| c["nanoid"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_country_returns_file_records_in_order() {
    let fixture = Fixture::new();
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/api/countries/fr").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["fr1", "fr2", "fr3"]);
    assert_eq!(body[0], channel("fr1", "France 24", "fr"));
}

#[tokio::test]
async fn test_country_code_is_lowercased() {
    let fixture = Fixture::new();
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/api/countries/GB").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["gb1", "gb2", "gb3"]);
}

#[tokio::test]
async fn test_unknown_country_is_internal_error() {
    let fixture = Fixture::new();
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/api/countries/zz").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to load channels" }));
}

#[tokio::test]
async fn test_malformed_country_code_is_rejected() {
    let fixture = Fixture::new();
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/api/countries/fr.json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_country_records_with_null_or_missing_fields_are_served_verbatim() {
    let fixture = Fixture::new();
    let records = json!([
        {
            "nanoid": "it1",
            "name": "Rai News 24",
            "iptv_urls": ["https://streams.example.com/it1.m3u8"],
            "youtube_urls": [],
            "language": null,
            "country": "it",
            "isGeoBlocked": true,
            "logo": "https://example.com/rai.png"
        },
        { "nanoid": "it2", "name": "TF1" },
        { "nanoid": "it3" }
    ]);
    write_json(&fixture.config.countries_path.join("it.json"), &records);
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/api/countries/it").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, records);

    let (status, news) = send_request(&app, "/api/categories/news").await;
    assert_eq!(status, StatusCode::OK);
    assert!(ids(&news).contains(&"it1".to_string()));
    assert!(!ids(&news).contains(&"it3".to_string()));
}

#[tokio::test]
async fn test_search_tolerates_odd_aggregate_records() {
    let fixture = Fixture::new();
    write_json(
        &fixture.config.aggregate_path(),
        &json!([
            { "nanoid": "a1", "name": "Eurosport 1", "language": null },
            { "nanoid": "a2", "name": null },
            { "nanoid": "a3" },
            { "nanoid": "a4", "name": "SPORT TV" }
        ]),
    );
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/api/search?q=sport").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "nanoid": "a1", "name": "Eurosport 1", "language": null },
            { "nanoid": "a4", "name": "SPORT TV" }
        ])
    );
}

#[tokio::test]
async fn test_news_category_only_returns_keyword_matches() {
    let fixture = Fixture::new();
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/api/categories/News").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["fr1", "fr3", "gb1"]);
    for channel in body.as_array().unwrap() {
        let name = channel["name"].as_str().unwrap().to_lowercase();
        assert!(name.contains("news") || name.contains("info") || name.contains("24"));
    }
}

#[tokio::test]
async fn test_sports_and_kids_categories() {
    let fixture = Fixture::new();
    let app = fixture.app().await;

    let (_, sports) = send_request(&app, "/api/categories/sports").await;
    assert_eq!(ids(&sports), vec!["gb2"]);

    let (_, kids) = send_request(&app, "/api/categories/kids").await;
    assert_eq!(ids(&kids), vec!["gb3"]);

    let (_, movies) = send_request(&app, "/api/categories/movies").await;
    assert!(ids(&movies).is_empty());
}

#[tokio::test]
async fn test_undefined_category_returns_whole_catalog() {
    let fixture = Fixture::new();
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/api/categories/weather").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_category_with_unreadable_countries_dir() {
    let fixture = Fixture::new();
    std::fs::remove_dir_all(&fixture.config.countries_path).unwrap();
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/api/categories/news").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to load channels" }));
}

#[tokio::test]
async fn test_category_list() {
    let fixture = Fixture::new();
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/api/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0], json!({ "name": "news", "keywords": ["news", "info", "24"] }));
    assert_eq!(body.as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_legacy_channels_requires_category() {
    let fixture = Fixture::new();
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/api/channels").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = send_request(&app, "/api/channels?category=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_legacy_channels_reads_category_file() {
    let fixture = Fixture::new();
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/api/channels?category=news").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["n1"]);

    let (status, body) = send_request(&app, "/api/channels?category=all%20channels").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_legacy_channels_error_statuses() {
    let fixture = Fixture::new();
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/api/channels?category=comedy").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Category not found" }));

    let (status, body) = send_request(&app, "/api/channels?category=broken").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));

    let (status, _) = send_request(&app, "/api/channels?category=..%2Fcountries%2Ffr").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_search_returns_empty_array() {
    let fixture = Fixture::new();
    let (app, catalog) = fixture.app_with_state().await;

    for uri in ["/api/search", "/api/search?q=", "/api/search?q=%20%20"] {
        let (status, body) = send_request(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
    assert!(!catalog.aggregate().is_loaded());
}

#[tokio::test]
async fn test_search_same_before_and_after_cache_load() {
    let fixture = Fixture::new();
    let (app, catalog) = fixture.app_with_state().await;

    let (status, first) = send_request(&app, "/api/search?q=sport").await;
    assert_eq!(status, StatusCode::OK);
    assert!(catalog.aggregate().is_loaded());

    let (_, second) = send_request(&app, "/api/search?q=SPORT").await;

    assert_eq!(ids(&first), vec!["a1", "a3"]);
    assert_eq!(first, second);
    assert_eq!(catalog.aggregate().disk_loads(), 1);
}

#[tokio::test]
async fn test_concurrent_searches_share_one_load() {
    let fixture = Fixture::new();
    let (app, catalog) = fixture.app_with_state().await;

    let requests = (0..16).map(|_| send_request(&app, "/api/search?q=sport"));
    let responses = futures::future::join_all(requests).await;

    for (status, body) in &responses {
        assert_eq!(*status, StatusCode::OK);
        assert_eq!(ids(body), vec!["a1", "a3"]);
    }
    assert_eq!(catalog.aggregate().disk_loads(), 1);
}

#[tokio::test]
async fn test_search_masks_unreadable_catalog() {
    let fixture = Fixture::new();
    std::fs::write(fixture.config.aggregate_path(), "not json").unwrap();
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/api/search?q=news").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_search_rejects_catalog_of_wrong_shape() {
    let fixture = Fixture::new();
    write_json(&fixture.config.aggregate_path(), &json!({ "channels": [] }));
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/api/search?q=news").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "Internal server error: Invalid channel data" })
    );
}

#[tokio::test]
async fn test_country_list_sorted_by_name() {
    let fixture = Fixture::new();
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/api/countries").await;

    assert_eq!(status, StatusCode::OK);
    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["aq", "fr", "gb"]);
    assert_eq!(body[1]["capital"], "Paris");
    assert_eq!(body[1]["hasChannels"], true);
}

#[tokio::test]
async fn test_country_info() {
    let fixture = Fixture::new();
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/api/countries/FR/info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "fr");
    assert_eq!(body["timeZone"], "Europe/Paris");
    assert_eq!(body["timeLabel"], "Time in FR");
    assert!(body["localTime"].as_str().unwrap().ends_with('M'));

    let (status, body) = send_request(&app, "/api/countries/aq/info").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["localTime"].is_null());

    let (status, body) = send_request(&app, "/api/countries/zz/info").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Country not found" }));
}

#[tokio::test]
async fn test_missing_metadata_still_serves_channels() {
    let fixture = Fixture::new();
    std::fs::remove_file(&fixture.config.metadata_path).unwrap();
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/api/countries").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, _) = send_request(&app, "/api/countries/fr").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_endpoint() {
    let fixture = Fixture::new();
    let app = fixture.app().await;

    let (status, body) = send_request(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["catalogCached"], false);
    assert_eq!(body["countries"], 3);

    send_request(&app, "/api/search?q=arte").await;
    let (_, body) = send_request(&app, "/health").await;
    assert_eq!(body["catalogCached"], true);
}
