//! Integration tests for the HTTP contract
//!
//! Every request, regardless of path or method, must yield HTTP 200 with a
//! JSON content type and a wildcard CORS header; only `GET /api/deals`
//! returns the listing array, everything else gets the route pointer.

use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot

use dealfeed::api::create_router;
use dealfeed::catalog::{self, Listing};

async fn send(method: &str, uri: &str) -> (StatusCode, HeaderMap, Value) {
    let response = create_router()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    (status, headers, value)
}

#[tokio::test]
async fn catalog_route_returns_nine_listings_in_authoring_order() {
    let (status, _, body) = send("GET", "/api/deals").await;

    assert_eq!(status, StatusCode::OK);
    let listings = body.as_array().expect("body should be a JSON array");
    assert_eq!(listings.len(), 9);

    let ids: Vec<u64> = listings
        .iter()
        .map(|l| l["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, (1..=9).collect::<Vec<u64>>());
}

#[tokio::test]
async fn first_listing_matches_authored_data() {
    let (_, _, body) = send("GET", "/api/deals").await;

    assert_eq!(
        body[0],
        json!({
            "id": 1,
            "title": "Luxury Villa with Ocean View",
            "image": "/img/deals/property-1.jpg",
            "price": "$2,500,000",
            "status": "For Sell",
            "type": "Villa",
            "location": "123 Ocean Drive, Miami, FL",
            "sqft": "5000 Sqft",
            "beds": "5 Bed",
            "baths": "6 Bath",
            "category": ["featured", "tab-2"]
        })
    );
}

#[tokio::test]
async fn listing_seven_marks_inapplicable_fields_na() {
    let (_, _, body) = send("GET", "/api/deals").await;

    let car = body
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l["id"] == 7)
        .expect("listing 7 should exist");
    assert_eq!(car["sqft"], "N/A");
    assert_eq!(car["beds"], "N/A");
    assert_eq!(car["baths"], "N/A");
}

#[tokio::test]
async fn unmatched_paths_return_route_pointer() {
    for path in ["/", "/nonexistent/path", "/api", "/api/deals/1"] {
        let (status, _, body) = send("GET", path).await;
        assert_eq!(status, StatusCode::OK, "path {path} should yield 200");
        assert_eq!(body, json!({ "route": "/api/deals" }), "path {path}");
    }
}

#[tokio::test]
async fn non_get_methods_fall_through_to_route_pointer() {
    for method in ["POST", "PUT", "DELETE", "PATCH"] {
        let (status, _, body) = send(method, "/api/deals").await;
        assert_eq!(status, StatusCode::OK, "{method} /api/deals should yield 200");
        assert_eq!(body, json!({ "route": "/api/deals" }), "{method} /api/deals");
    }
}

#[tokio::test]
async fn every_response_carries_json_and_cors_headers() {
    for (method, uri) in [
        ("GET", "/api/deals"),
        ("GET", "/"),
        ("GET", "/nonexistent/path"),
        ("POST", "/api/deals"),
    ] {
        let (_, headers, _) = send(method, uri).await;

        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(
            content_type.starts_with("application/json"),
            "{method} {uri}: unexpected content type {content_type}"
        );

        assert_eq!(
            headers
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("*"),
            "{method} {uri}: missing wildcard CORS header"
        );
    }
}

#[tokio::test]
async fn catalog_body_round_trips_without_field_loss() {
    let (_, _, body) = send("GET", "/api/deals").await;

    let listings: Vec<Listing> = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(listings, catalog::all());

    let expected_keys = [
        "id", "title", "image", "price", "status", "type", "location", "sqft", "beds", "baths",
        "category",
    ];
    for listing in body.as_array().unwrap() {
        let object = listing.as_object().unwrap();
        assert_eq!(object.len(), expected_keys.len());
        for key in expected_keys {
            assert!(object.contains_key(key), "missing key {key}");
        }
    }
}
