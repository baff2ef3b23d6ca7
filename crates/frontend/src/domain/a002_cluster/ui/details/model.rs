//! Типизированные вызовы ресурса `/api/cluster`

use crate::shared::api::ApiClient;
use contracts::domain::a002_cluster::aggregate::{Cluster, ClusterDto};
use contracts::domain::a003_facility::aggregate::Facility;

pub async fn fetch_clusters(api: ApiClient) -> Result<Vec<Cluster>, String> {
    api.get_json("/api/cluster").await
}

pub async fn fetch_by_id(api: ApiClient, id: &str) -> Result<Cluster, String> {
    api.get_json(&format!("/api/cluster/{}", id)).await
}

/// Объекты, привязанные к кластеру (связь хранится на стороне объекта)
pub async fn fetch_cluster_facilities(api: ApiClient, id: &str) -> Result<Vec<Facility>, String> {
    api.get_json(&format!("/api/cluster/{}/facilities", id)).await
}

pub async fn save_form(api: ApiClient, dto: &ClusterDto) -> Result<(), String> {
    let _: serde_json::Value = match dto.id {
        Some(ref id) => api.put_json(&format!("/api/cluster/{}", id), dto).await?,
        None => api.post_json("/api/cluster", dto).await?,
    };
    Ok(())
}

pub async fn delete_cluster(api: ApiClient, id: &str) -> Result<(), String> {
    api.delete(&format!("/api/cluster/{}", id)).await
}
