//! Typed endpoint modules against a mock backend

mod common;

use axum::extract::{Multipart, Path};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use booking_client::{CatalogSource, ClientError, SearchDispatcher};
use serde_json::{Value, json};
use shared::BookingType;
use shared::client::UserRole;
use shared::models::{EventDraft, VerificationStatus};

const PHONE: &str = "9876543210";

fn location(venue: &str, city: &str) -> Value {
    json!({
        "venue_name": venue,
        "address": "1 Main Road",
        "city": city,
        "state": "Maharashtra"
    })
}

fn events() -> Value {
    json!([{
        "id": "ev_1",
        "title": "Sunburn Arena",
        "slug": "sunburn-arena",
        "location": location("Mahalaxmi Lawns", "Pune"),
        "start_date": "2026-12-27",
        "start_time": "16:00",
        "ticket_types": [{"name": "GA", "price": "1499", "available": 500}]
    }])
}

fn play_venues() -> Value {
    json!([{
        "id": "pl_1",
        "name": "Smash Arena",
        "slug": "smash-arena",
        "location": location("Smash Arena", "Pune"),
        "play_options": [{"sport": "Badminton", "price_per_slot": "400"}]
    }])
}

fn dining_venues() -> Value {
    json!([{
        "id": "dn_1",
        "name": "Toit Brewpub",
        "slug": "toit-brewpub",
        "location": location("Toit", "Bengaluru"),
        "booking_fee": "100",
        "offers": [{
            "id": "of_1",
            "title": "Flat 20% off",
            "discount_type": "percentage",
            "discount_value": "20"
        }]
    }])
}

fn is_signed_in(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "Bearer tok-1")
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"success": false, "message": "Please sign in"})),
    )
        .into_response()
}

fn app() -> Router {
    Router::new()
        .route(
            "/api/v1/auth/send-otp",
            post(|| async { Json(json!({"success": true, "message": "OTP sent"})) }),
        )
        .route(
            "/api/v1/auth/verify-otp",
            post(|Json(body): Json<Value>| async move {
                if body["otp"] != "123456" {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(json!({"success": false, "message": "Invalid OTP"})),
                    )
                        .into_response();
                }
                Json(json!({
                    "success": true,
                    "message": "Signed in",
                    "data": {
                        "token": "tok-1",
                        "user": {"id": "u_1", "phone": body["phone"], "role": "admin"}
                    }
                }))
                .into_response()
            }),
        )
        .route(
            "/api/v1/auth/me",
            get(|headers: HeaderMap| async move {
                if !is_signed_in(&headers) {
                    return unauthorized();
                }
                Json(json!({"success": true, "data": {"id": "u_1", "phone": PHONE, "role": "admin"}}))
                    .into_response()
            }),
        )
        .route(
            "/api/v1/auth/logout",
            post(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({"message": "Try again later"})),
                )
            }),
        )
        .route(
            "/api/v1/events",
            get(|| async { Json(json!({"success": true, "data": events()})) }),
        )
        .route(
            "/api/v1/play",
            get(|| async { Json(json!({"success": true, "data": play_venues()})) }),
        )
        .route(
            "/api/v1/dining",
            get(|| async { Json(json!({"success": true, "data": dining_venues()})) }),
        )
        .route(
            "/api/v1/dining/{slug}",
            get(|Path(slug): Path<String>| async move {
                let venue = dining_venues()[0].clone();
                if venue["slug"] != slug.as_str() {
                    return (
                        StatusCode::NOT_FOUND,
                        Json(json!({"success": false, "message": "Outlet not found"})),
                    )
                        .into_response();
                }
                Json(json!({"success": true, "data": venue})).into_response()
            }),
        )
        .route(
            "/api/v1/states/{state}/districts",
            get(|Path(state): Path<String>| async move {
                Json(json!({"success": true, "data": [{"name": format!("{state} North")}]}))
            }),
        )
        .route(
            "/api/v1/admin/partners/{id}/approve",
            patch(
                |Path(id): Path<String>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    if !is_signed_in(&headers) {
                        return unauthorized();
                    }
                    Json(json!({
                        "success": true,
                        "data": {
                            "id": id,
                            "organization": {"name": "Turf Ventures LLP"},
                            "bank": {"account_number": "50100012345678", "ifsc": "HDFC0001234"},
                            "contact": {"name": "Asha", "email": "asha@example.com", "phone": PHONE},
                            "status": "approved",
                            "remarks": body["remarks"]
                        }
                    }))
                    .into_response()
                },
            ),
        )
        .route(
            "/api/v1/offers/{id}",
            delete(|Path(id): Path<String>| async move {
                Json(json!({"success": true, "message": format!("Offer {id} deleted")}))
            }),
        )
        .route(
            "/api/v1/upload",
            post(|mut multipart: Multipart| async move {
                while let Ok(Some(field)) = multipart.next_field().await {
                    if field.name() != Some("file") {
                        continue;
                    }
                    let name = field.file_name().unwrap_or_default().to_string();
                    let mime = field.content_type().unwrap_or_default().to_string();
                    let size = field.bytes().await.map(|b| b.len()).unwrap_or(0);
                    return Json(json!({
                        "success": true,
                        "data": {"url": format!("https://cdn.example.com/{mime}/{size}/{name}"), "key": name}
                    }))
                    .into_response();
                }
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"success": false, "message": "No file"})),
                )
                    .into_response()
            }),
        )
}

#[tokio::test]
async fn test_otp_login_me_and_logout() {
    let base = common::serve(app()).await;
    let client = common::client(&base);

    assert_eq!(client.send_otp(PHONE).await.unwrap(), "OTP sent");

    let err = client.verify_otp(PHONE, "000000").await.unwrap_err();
    assert_eq!(err.user_message(), "Invalid OTP");
    assert!(!client.session().is_signed_in().await);

    let err = client.me().await.unwrap_err();
    assert!(err.is_unauthorized());

    let user = client.verify_otp(PHONE, "123456").await.unwrap();
    assert_eq!(user.role, UserRole::Admin);
    assert!(client.session().is_signed_in().await);
    assert_eq!(client.me().await.unwrap().id, "u_1");

    // Backend logout fails, local session is still dropped
    client.logout().await.unwrap();
    assert!(!client.session().is_signed_in().await);
}

#[tokio::test]
async fn test_invalid_phone_never_reaches_backend() {
    common::init_tracing();
    let client = common::client("http://127.0.0.1:9");
    let err = client.send_otp("12345").await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)), "got {err:?}");
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_backend() {
    common::init_tracing();
    let client = common::client("http://127.0.0.1:9");
    let err = client.create_event(&EventDraft::default()).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)), "got {err:?}");
    assert_eq!(err.user_message(), "title is required");
}

#[tokio::test]
async fn test_listing_endpoints_parse_models() {
    let base = common::serve(app()).await;
    let client = common::client(&base);

    let events = client.list_events().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].draft.ticket_types[0].price.to_string(), "1499");

    let play = client.list_play_venues().await.unwrap();
    assert_eq!(play[0].draft.play_options[0].slot_minutes, 60);

    let venue = client.get_dining_venue("toit-brewpub").await.unwrap();
    assert_eq!(venue.offers.len(), 1);
    assert_eq!(venue.offers[0].discount_label(), "20% off");

    let err = client.get_dining_venue("nope").await.unwrap_err();
    assert_eq!(err.user_message(), "Outlet not found");
}

#[tokio::test]
async fn test_districts_path_is_encoded() {
    let base = common::serve(app()).await;
    let client = common::client(&base);

    let districts = client.list_districts("Tamil Nadu").await.unwrap();
    assert_eq!(districts[0].name, "Tamil Nadu North");
}

#[tokio::test]
async fn test_approve_partner_requires_session() {
    let base = common::serve(app()).await;
    let client = common::client(&base);

    let err = client.approve_partner("pt_9", None).await.unwrap_err();
    assert!(err.is_unauthorized());

    client.verify_otp(PHONE, "123456").await.unwrap();
    let partner = client
        .approve_partner("pt_9", Some("Documents verified".into()))
        .await
        .unwrap();
    assert_eq!(partner.id, "pt_9");
    assert_eq!(partner.verification.status, VerificationStatus::Approved);
    assert_eq!(
        partner.verification.remarks.as_deref(),
        Some("Documents verified")
    );
}

#[tokio::test]
async fn test_delete_offer() {
    let base = common::serve(app()).await;
    let client = common::client(&base);
    client.delete_offer("of_1").await.unwrap();
}

#[tokio::test]
async fn test_upload_sends_multipart_image() {
    let base = common::serve(app()).await;
    let client = common::client(&base);

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("hero.png");
    std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

    let uploaded = client.upload_image(&path).await.unwrap();
    assert_eq!(uploaded.key.as_deref(), Some("hero.png"));
    assert_eq!(uploaded.url, "https://cdn.example.com/image/png/4/hero.png");
}

#[tokio::test]
async fn test_catalog_search_over_loaded_listings() {
    let base = common::serve(app()).await;
    let client = common::client(&base);

    let catalog = CatalogSource::load(&client).await.unwrap();
    assert_eq!(catalog.len(), 3);

    let dispatcher = SearchDispatcher::with_debounce(catalog, std::time::Duration::from_millis(20));
    let mut results = dispatcher.subscribe();
    dispatcher.push("pune");
    results.changed().await.unwrap();

    let kinds: Vec<BookingType> = results.borrow().listings.iter().map(|l| l.kind).collect();
    assert_eq!(kinds, vec![BookingType::Event, BookingType::Play]);

    dispatcher.shutdown();
    dispatcher.join().await;
}
