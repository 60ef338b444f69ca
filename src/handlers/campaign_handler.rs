//! handlers/campaign_handler.rs
//! Alta y consulta de campañas (lo que antes hacía el formulario web directo contra Appwrite).

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::{
    models::campaign_model::{
        CampaignStatus, CreateCampaignRequest, CreateCampaignResponse, ListCampaignsResponse,
        NewCampaign,
    },
    services::store_service::CampaignStore,
};

#[derive(Deserialize)]
pub struct StatusQuery {
    status: Option<String>,
}

/// POST /api/campaigns
pub async fn create_campaign_endpoint(
    store: web::Data<dyn CampaignStore>,
    body: web::Json<CreateCampaignRequest>,
) -> HttpResponse {
    let new_campaign = NewCampaign::from(body.into_inner());

    let missing: Vec<&str> = [
        ("business_name", &new_campaign.business_name),
        ("description", &new_campaign.description),
        ("target", &new_campaign.target),
    ]
    .into_iter()
    .filter(|(_, v)| v.is_empty())
    .map(|(k, _)| k)
    .collect();
    if !missing.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": format!("Missing required fields: {}", missing.join(", "))
        }));
    }

    match store.create_campaign(&new_campaign).await {
        Ok(campaign) => HttpResponse::Ok().json(CreateCampaignResponse {
            success: true,
            campaign_id: campaign.id,
            message: "Campaign created".to_string(),
        }),
        Err(e) => {
            log::error!("(create_campaign_endpoint) Error creando campaña: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

/// GET /api/campaigns?status=ready
pub async fn list_campaigns_endpoint(
    store: web::Data<dyn CampaignStore>,
    query: web::Query<StatusQuery>,
) -> HttpResponse {
    let status = match query.status.as_deref().unwrap_or("ready").parse::<CampaignStatus>() {
        Ok(s) => s,
        Err(e) => {
            return HttpResponse::BadRequest().json(json!({
                "success": false,
                "error": e
            }))
        }
    };

    match store.list_campaigns(status).await {
        Ok(items) => HttpResponse::Ok().json(ListCampaignsResponse {
            status,
            total: items.len(),
            items,
        }),
        Err(e) => {
            log::error!("(list_campaigns_endpoint) Error listando campañas: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}
