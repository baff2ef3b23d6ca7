//! Типизированные вызовы ресурса `/api/facility` и внешнего геокодера

use crate::shared::api::config::{enrichment_base, enrichment_token};
use crate::shared::api::ApiClient;
use contracts::domain::a003_facility::aggregate::{Facility, FacilityDto, GeoPoint};
use serde::Deserialize;

pub async fn fetch_facilities(api: ApiClient) -> Result<Vec<Facility>, String> {
    api.get_json("/api/facility").await
}

pub async fn fetch_by_id(api: ApiClient, id: &str) -> Result<Facility, String> {
    api.get_json(&format!("/api/facility/{}", id)).await
}

pub async fn save_form(api: ApiClient, dto: &FacilityDto) -> Result<(), String> {
    let _: serde_json::Value = match dto.id {
        Some(ref id) => api.put_json(&format!("/api/facility/{}", id), dto).await?,
        None => api.post_json("/api/facility", dto).await?,
    };
    Ok(())
}

pub async fn delete_facility(api: ApiClient, id: &str) -> Result<(), String> {
    api.delete(&format!("/api/facility/{}", id)).await
}

/// Ответ внешнего сервиса обогащения. Не часть контракта бэкенда,
/// поэтому тип живёт здесь, а не в crates/contracts.
#[derive(Debug, Clone, Deserialize)]
struct GeocodeResponse {
    lat: f64,
    lon: f64,
}

/// Доступен ли геокодер (настроен ли endpoint при сборке)
pub fn geocoder_available() -> bool {
    enrichment_base().is_some()
}

/// Запрос координат по почтовому адресу у внешнего сервиса обогащения.
///
/// Идёт мимо ApiClient: чужой хост, свой токен, свои ошибки
/// (вызывающий показывает их в форме, а не тостом).
pub async fn geocode_address(address: &str) -> Result<GeoPoint, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let base = enrichment_base().ok_or_else(|| "Геокодер не настроен".to_string())?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!(
        "{}/geocode?q={}",
        base.trim_end_matches('/'),
        urlencoding::encode(address)
    );
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    if let Some(token) = enrichment_token() {
        request
            .headers()
            .set("Authorization", &format!("Token {}", token))
            .map_err(|e| format!("{e:?}"))?;
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: GeocodeResponse = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;

    let point = GeoPoint::new(data.lat, data.lon);
    if !point.is_valid() {
        return Err("Геокодер вернул координаты вне допустимого диапазона".to_string());
    }
    Ok(point)
}
