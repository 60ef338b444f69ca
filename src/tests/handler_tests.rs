//! tests/handler_tests.rs
//! API de alta/consulta de campañas sobre un store en memoria.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use crate::app::init_app;
use crate::models::campaign_model::CampaignStatus;
use crate::services::store_service::CampaignStore;

use super::{campaign, FakeStore};

#[actix_rt::test]
async fn test_create_campaign_starts_ready() {
    let fake = Arc::new(FakeStore::default());
    let store: Arc<dyn CampaignStore> = fake.clone();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::from(store))
            .configure(init_app),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/campaigns")
        .set_json(json!({
            "business_name": " Chai Point ",
            "description": "Hand-brewed chai",
            "category": "Food",
            "target": "Growth",
            "link": ""
        }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["success"], true);
    assert_eq!(resp["campaign_id"], "fake-1");
    let created = fake.get("fake-1");
    assert_eq!(created.business_name, "Chai Point");
    assert_eq!(created.status, CampaignStatus::Ready);
    assert!(created.link.is_none());
    assert!(created.messages.is_empty());
}

#[actix_rt::test]
async fn test_create_campaign_requires_fields() {
    let store: Arc<dyn CampaignStore> = Arc::new(FakeStore::default());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::from(store))
            .configure(init_app),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/campaigns")
        .set_json(json!({"business_name": "", "description": "x", "target": " "}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "Missing required fields: business_name, target"
    );
}

#[actix_rt::test]
async fn test_list_campaigns_by_status() {
    let store: Arc<dyn CampaignStore> = Arc::new(FakeStore::with_campaigns(vec![
        campaign("a", CampaignStatus::Ready),
        campaign("b", CampaignStatus::Sent),
        campaign("c", CampaignStatus::Ready),
    ]));
    let app = test::init_service(
        App::new()
            .app_data(web::Data::from(store))
            .configure(init_app),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/campaigns").to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["status"], "ready");
    assert_eq!(resp["total"], 2);

    let req = test::TestRequest::get()
        .uri("/api/campaigns?status=sent")
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["total"], 1);
    assert_eq!(resp["items"][0]["$id"], "b");

    let req = test::TestRequest::get()
        .uri("/api/campaigns?status=pending")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
