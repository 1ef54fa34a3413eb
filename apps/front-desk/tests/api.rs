//! End-to-end tests for the front-desk API, driven through the router with
//! `oneshot` (no sockets).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use front_desk::export::{ExportError, ExportedInvoice, InvoiceExporter, TextFileExporter};
use front_desk::{router, AppConfig, AppState};
use http_body_util::BodyExt;
use mint_core::invoice::{Invoice, SalonInfo};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::util::ServiceExt;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn test_config(dir: &TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.paths.exports_dir = Some(dir.path().join("invoices"));
    config.paths.preferences_file = Some(dir.path().join("preferences.toml"));
    config
}

async fn demo_app(dir: &TempDir) -> Router {
    router(AppState::from_config(test_config(dir), today()).await)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

// =============================================================================
// Health & Config
// =============================================================================

#[tokio::test]
async fn test_health() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_config_view() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    let (status, body) = get(&app, "/api/config").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["salon"]["name"], "MintSalon");
    assert_eq!(body["tax_rate_bps"], 800);
    assert_eq!(body["themes"].as_array().unwrap().len(), 5);
}

// =============================================================================
// Clients
// =============================================================================

#[tokio::test]
async fn test_client_roster_and_search() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    let (_, all) = get(&app, "/api/clients").await;
    assert_eq!(all.as_array().unwrap().len(), 4);

    let (status, found) = get(&app, "/api/clients?search=sarah").await;
    assert_eq!(status, StatusCode::OK);
    let found = found.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Sarah Jenkins");

    let (_, by_phone) = get(&app, "/api/clients?search=987").await;
    assert_eq!(by_phone[0]["name"], "Michael Chen");
}

#[tokio::test]
async fn test_client_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/clients",
        Some(json!({ "name": "  Ava Patel ", "phone": "(555) 444-1212" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Ava Patel");
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 9);

    // Newest first
    let (_, all) = get(&app, "/api/clients").await;
    assert_eq!(all[0]["id"], id.as_str());

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &format!("/api/clients/{}", id),
        Some(json!({ "notes": "Allergic to lavender." })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["notes"], "Allergic to lavender.");
    assert_eq!(updated["phone"], "(555) 444-1212");

    let (status, _) = send(&app, Method::DELETE, &format!("/api/clients/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(&app, &format!("/api/clients/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_client_validation() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    let (status, body) = send(&app, Method::POST, "/api/clients", Some(json!({ "name": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/clients",
        Some(json!({ "name": "Ava", "email": "not-an-email" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::PATCH, "/api/clients/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::PATCH, "/api/clients/zz", Some(json!({ "name": "X" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_client_history_survives_delete() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    let (status, detail) = get(&app, "/api/clients/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["client"]["name"], "Sarah Jenkins");
    let history = detail["history"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["service_name"], "Women's Haircut");

    send(&app, Method::DELETE, "/api/clients/1", None).await;

    let (_, apts) = get(&app, "/api/appointments").await;
    assert_eq!(apts[0]["client_name"], "Sarah Jenkins");
}

// =============================================================================
// Services & Staff
// =============================================================================

#[tokio::test]
async fn test_services() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    let (_, flat) = get(&app, "/api/services").await;
    assert_eq!(flat.as_array().unwrap().len(), 6);

    let (_, grouped) = get(&app, "/api/services?grouped=true").await;
    let grouped = grouped.as_array().unwrap();
    assert_eq!(grouped.len(), 4);
    assert_eq!(grouped[0]["category"], "hair");
    assert_eq!(grouped[0]["services"].as_array().unwrap().len(), 3);

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/services",
        Some(json!({ "name": "Spa Pedicure", "price": "55.50", "duration_min": 50, "category": "Nails" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["price_cents"], 5550);

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/services",
        Some(json!({ "name": "Scalp Treatment", "price": 30, "duration_min": 20, "category": "hair" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["price_cents"], 3000);

    let (_, flat) = get(&app, "/api/services").await;
    assert_eq!(flat[6]["name"], "Spa Pedicure");

    let (status, _) = send(&app, Method::DELETE, "/api/services/s4", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::DELETE, "/api/services/s4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_service_validation() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    for body in [
        json!({ "name": "", "price": "10", "duration_min": 30, "category": "hair" }),
        json!({ "name": "Trim", "price": "ten", "duration_min": 30, "category": "hair" }),
        json!({ "name": "Trim", "price": "-5", "duration_min": 30, "category": "hair" }),
        json!({ "name": "Trim", "price": "10", "duration_min": 0, "category": "hair" }),
        json!({ "name": "Trim", "price": "10", "duration_min": 30, "category": "tattoo" }),
    ] {
        let (status, reply) = send(&app, Method::POST, "/api/services", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", reply);
    }
}

#[tokio::test]
async fn test_staff() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    let (_, staff) = get(&app, "/api/staff").await;
    let names: Vec<_> = staff
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Jessica A.", "David B.", "Maria G."]);
}

// =============================================================================
// Appointments & Schedule
// =============================================================================

#[tokio::test]
async fn test_booking() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    let (status, apt) = send(
        &app,
        Method::POST,
        "/api/appointments",
        Some(json!({
            "client_id": "1",
            "service_id": "s1",
            "date": "2024-03-01",
            "time": "16:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(apt["client_name"], "Sarah Jenkins");
    assert_eq!(apt["service_name"], "Women's Haircut");
    assert_eq!(apt["duration_min"], 60);
    assert_eq!(apt["staff_id"], "st1");
    assert_eq!(apt["time"], "16:00");
    assert_eq!(apt["status"], "scheduled");
    assert_eq!(apt["color"], "scheduled");
    assert_eq!(apt["reminder_sent"], false);

    let (_, day) = get(&app, "/api/appointments?date=2024-03-01").await;
    assert_eq!(day.as_array().unwrap().len(), 4);
    let (_, other_day) = get(&app, "/api/appointments?date=2024-03-02").await;
    assert!(other_day.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_booking_missing_reference() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    for (client, service, staff) in [("zz", "s1", "st1"), ("1", "s99", "st1"), ("1", "s1", "st9")] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/appointments",
            Some(json!({
                "client_id": client,
                "service_id": service,
                "staff_id": staff,
                "date": "2024-03-01",
                "time": "12:00"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "INVALID_REFERENCE");
    }

    let (_, all) = get(&app, "/api/appointments").await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_status_and_reminder() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    let (status, apt) = send(
        &app,
        Method::PUT,
        "/api/appointments/a2/status",
        Some(json!({ "status": "no_show" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(apt["color"], "no_show");

    let (_, first) = send(&app, Method::POST, "/api/appointments/a2/reminder", None).await;
    assert_eq!(first["reminder_sent"], true);
    let (_, second) = send(&app, Method::POST, "/api/appointments/a2/reminder", None).await;
    assert_eq!(second["reminder_sent"], false);

    let (status, _) = send(&app, Method::POST, "/api/appointments/zz/reminder", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, stats) = get(&app, "/api/appointments/stats").await;
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["completed"], 1);
    assert_eq!(stats["upcoming"], 1);
    assert_eq!(stats["no_show"], 1);
}

#[tokio::test]
async fn test_schedule_grid() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    send(
        &app,
        Method::POST,
        "/api/appointments",
        Some(json!({ "client_id": "2", "service_id": "s2", "date": "2024-03-01", "time": "07:30" })),
    )
    .await;

    let (status, grid) = get(&app, "/api/schedule?date=2024-03-01").await;
    assert_eq!(status, StatusCode::OK);

    let rows = grid["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 11);
    assert_eq!(rows[0]["label"], "9 AM");
    assert_eq!(rows[3]["label"], "12 PM");

    // 10:00, 11:30 and 14:00 land in their hour rows
    assert_eq!(rows[1]["appointments"].as_array().unwrap().len(), 1);
    assert_eq!(rows[2]["appointments"][0]["id"], "a2");
    assert_eq!(rows[5]["appointments"][0]["id"], "a3");

    // End times come from the booked durations
    assert_eq!(rows[1]["appointments"][0]["end_time"], "11:00");
    assert_eq!(rows[2]["appointments"][0]["end_time"], "12:00");
    assert_eq!(rows[5]["appointments"][0]["end_time"], "14:45");

    let unplaced = grid["unplaced"].as_array().unwrap();
    assert_eq!(unplaced.len(), 1);
    assert_eq!(unplaced[0]["time"], "07:30");
    assert_eq!(unplaced[0]["end_time"], "08:00");
}

// =============================================================================
// Billing
// =============================================================================

async fn add_line(app: &Router, service_id: &str) -> Value {
    let (status, view) = send(
        app,
        Method::POST,
        "/api/billing/items",
        Some(json!({ "service_id": service_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    view
}

#[tokio::test]
async fn test_billing_draft() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    let (_, empty) = get(&app, "/api/billing").await;
    assert_eq!(empty["bill_to_name"], "Walk-in Customer");
    assert_eq!(empty["include_tax"], true);
    assert_eq!(empty["payment_method"], "Card");

    add_line(&app, "s1").await;
    let view = add_line(&app, "s3").await;
    assert_eq!(view["totals"]["subtotal"], 10500);
    assert_eq!(view["totals"]["tax"], 840);
    assert_eq!(view["totals"]["total"], 11340);

    // Same service twice gives two lines
    let view = add_line(&app, "s3").await;
    let lines = view["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 3);
    let last_line = lines[2]["line_id"].as_u64().unwrap();

    let (status, view) = send(&app, Method::DELETE, &format!("/api/billing/items/{}", last_line), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["lines"].as_array().unwrap().len(), 2);

    let (status, _) = send(&app, Method::DELETE, "/api/billing/items/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, view) = send(
        &app,
        Method::PUT,
        "/api/billing/options",
        Some(json!({ "include_tax": false, "payment_method": "UPI", "bill_to": { "kind": "client", "id": "3" } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["totals"]["tax"], 0);
    assert_eq!(view["totals"]["total"], 10500);
    assert_eq!(view["bill_to_name"], "Emma Watson");
    assert_eq!(view["payment_method"], "UPI");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/billing/options",
        Some(json!({ "bill_to": { "kind": "client", "id": "zz" } })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, view) = send(&app, Method::DELETE, "/api/billing", None).await;
    assert!(view["lines"].as_array().unwrap().is_empty());
    assert_eq!(view["payment_method"], "Card");
}

#[tokio::test]
async fn test_billing_unknown_service() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/billing/items",
        Some(json!({ "service_id": "s99" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INVALID_REFERENCE");
}

#[tokio::test]
async fn test_export_invoice() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    add_line(&app, "s1").await;
    add_line(&app, "s3").await;
    send(
        &app,
        Method::PUT,
        "/api/billing/options",
        Some(json!({ "bill_to": { "kind": "client", "id": "1" }, "payment_method": "Cash" })),
    )
    .await;

    let (status, result) = send(&app, Method::POST, "/api/billing/export", None).await;
    assert_eq!(status, StatusCode::OK);

    let invoice = &result["invoice"];
    assert_eq!(invoice["subtotal"], 10500);
    assert_eq!(invoice["tax"], 840);
    assert_eq!(invoice["total"], 11340);
    assert_eq!(invoice["status"], "Paid");
    assert_eq!(invoice["bill_to"]["name"], "Sarah Jenkins");
    assert!(result["display_number"].as_str().unwrap().starts_with("INV-"));

    let file_name = result["file"]["file_name"].as_str().unwrap();
    assert!(file_name.starts_with("MintSalon-Invoice-"));
    let written = std::fs::read_to_string(dir.path().join("invoices").join(file_name)).unwrap();
    assert!(written.contains("Sarah Jenkins"));
    assert!(written.contains("$113.40"));
    assert!(written.contains("Payment Method: Cash"));

    // Draft is cleared once saved
    let (_, view) = get(&app, "/api/billing").await;
    assert!(view["lines"].as_array().unwrap().is_empty());
    assert_eq!(view["bill_to_name"], "Walk-in Customer");
}

#[tokio::test]
async fn test_export_deleted_client_prints_guest() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    add_line(&app, "s2").await;
    send(
        &app,
        Method::PUT,
        "/api/billing/options",
        Some(json!({ "bill_to": { "kind": "client", "id": "4" } })),
    )
    .await;
    send(&app, Method::DELETE, "/api/clients/4", None).await;

    let (status, result) = send(&app, Method::POST, "/api/billing/export", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["invoice"]["bill_to"]["name"], "Guest");
}

#[tokio::test]
async fn test_export_empty_draft() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    let (status, body) = send(&app, Method::POST, "/api/billing/export", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

struct BrokenExporter;

impl InvoiceExporter for BrokenExporter {
    fn export(&self, _invoice: &Invoice, _salon: &SalonInfo) -> Result<ExportedInvoice, ExportError> {
        Err(ExportError::Task("disk full".to_string()))
    }
}

#[tokio::test]
async fn test_failed_export_keeps_draft() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::from_config(test_config(&dir), today())
        .await
        .with_exporter(Arc::new(BrokenExporter));
    let app = router(state);

    add_line(&app, "s5").await;

    let (status, body) = send(&app, Method::POST, "/api/billing/export", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "EXPORT_ERROR");

    let (_, view) = get(&app, "/api/billing").await;
    assert_eq!(view["lines"].as_array().unwrap().len(), 1);
}

/// Writes like the real exporter, but slowly, and counts its calls.
struct SlowExporter {
    inner: TextFileExporter,
    calls: AtomicUsize,
}

impl InvoiceExporter for SlowExporter {
    fn export(&self, invoice: &Invoice, salon: &SalonInfo) -> Result<ExportedInvoice, ExportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(200));
        self.inner.export(invoice, salon)
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_exports_bill_once() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = Arc::new(SlowExporter {
        inner: TextFileExporter::new(dir.path().join("invoices")),
        calls: AtomicUsize::new(0),
    });
    let state = AppState::from_config(test_config(&dir), today())
        .await
        .with_exporter(exporter.clone());
    let app = router(state);

    add_line(&app, "s1").await;
    add_line(&app, "s3").await;

    let (first, second) = tokio::join!(
        send(&app, Method::POST, "/api/billing/export", None),
        send(&app, Method::POST, "/api/billing/export", None),
    );

    let mut statuses = vec![first.0, second.0];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::OK, StatusCode::BAD_REQUEST]);
    assert_eq!(exporter.calls.load(Ordering::SeqCst), 1);

    let issued = if first.0 == StatusCode::OK { &first.1 } else { &second.1 };
    assert_eq!(issued["invoice"]["items"].as_array().unwrap().len(), 2);

    let files = std::fs::read_dir(dir.path().join("invoices")).unwrap().count();
    assert_eq!(files, 1);

    let (_, view) = get(&app, "/api/billing").await;
    assert!(view["lines"].as_array().unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_line_added_during_export_stays() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = Arc::new(SlowExporter {
        inner: TextFileExporter::new(dir.path().join("invoices")),
        calls: AtomicUsize::new(0),
    });
    let state = AppState::from_config(test_config(&dir), today())
        .await
        .with_exporter(exporter);
    let app = router(state);

    add_line(&app, "s1").await;

    let add_later = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        add_line(&app, "s5").await
    };
    let ((status, result), _) = tokio::join!(
        send(&app, Method::POST, "/api/billing/export", None),
        add_later,
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["invoice"]["items"].as_array().unwrap().len(), 1);

    let (_, view) = get(&app, "/api/billing").await;
    let lines = view["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["service_id"], "s5");
}

// =============================================================================
// Preferences
// =============================================================================

#[tokio::test]
async fn test_preferences_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let app = demo_app(&dir).await;

    let (_, prefs) = get(&app, "/api/preferences").await;
    assert_eq!(prefs["dark_mode"], false);
    assert_eq!(prefs["color_theme"], "teal");

    let (status, prefs) = send(
        &app,
        Method::PUT,
        "/api/preferences",
        Some(json!({ "color_theme": "amber" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(prefs["color_theme"], "amber");
    assert_eq!(prefs["dark_mode"], false);

    // A fresh app reads what was saved
    let reopened = demo_app(&dir).await;
    let (_, prefs) = get(&reopened, "/api/preferences").await;
    assert_eq!(prefs["color_theme"], "amber");
}

#[tokio::test]
async fn test_empty_salon() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(&dir);
    config.data.seed_demo = false;
    let app = router(AppState::from_config(config, today()).await);

    let (_, clients) = get(&app, "/api/clients").await;
    assert!(clients.as_array().unwrap().is_empty());
    let (_, staff) = get(&app, "/api/staff").await;
    assert_eq!(staff.as_array().unwrap().len(), 3);
    let (_, grid) = get(&app, "/api/schedule?date=2024-03-01").await;
    assert!(grid["unplaced"].as_array().unwrap().is_empty());
}
