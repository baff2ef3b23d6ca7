//! Типизированные вызовы ресурса `/api/campaign`

use crate::shared::api::ApiClient;
use contracts::domain::a005_campaign::aggregate::{
    Campaign, CampaignDto, ChangeCampaignStatusRequest,
};
use contracts::enums::campaign_status::CampaignStatus;

pub async fn fetch_campaigns(api: ApiClient) -> Result<Vec<Campaign>, String> {
    api.get_json("/api/campaign").await
}

pub async fn fetch_by_id(api: ApiClient, id: &str) -> Result<Campaign, String> {
    api.get_json(&format!("/api/campaign/{}", id)).await
}

pub async fn save_form(api: ApiClient, dto: &CampaignDto) -> Result<(), String> {
    let _: serde_json::Value = match dto.id {
        Some(ref id) => api.put_json(&format!("/api/campaign/{}", id), dto).await?,
        None => api.post_json("/api/campaign", dto).await?,
    };
    Ok(())
}

pub async fn delete_campaign(api: ApiClient, id: &str) -> Result<(), String> {
    api.delete(&format!("/api/campaign/{}", id)).await
}

/// Запрос смены статуса. Допустимость перехода проверяет сервер.
pub async fn change_status(
    api: ApiClient,
    id: &str,
    status: CampaignStatus,
) -> Result<(), String> {
    let request = ChangeCampaignStatusRequest { status };
    let _: serde_json::Value = api
        .post_json(&format!("/api/campaign/{}/status", id), &request)
        .await?;
    Ok(())
}
