//! Состояние каскадного фильтра прайс-матрицы.
//!
//! Смена кластера сбрасывает нижестоящие фильтры: их допустимые значения
//! открываются сервером заново для нового кластера.

use contracts::projections::p910_price_margin::dto::PricingFilterQuery;
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PricingState {
    pub cluster_id: Option<String>,
    pub facility_id: Option<String>,
    pub category_id: Option<String>,
    pub brand: Option<String>,
}

impl PricingState {
    /// Выбор кластера: нижестоящие фильтры теряют смысл и сбрасываются
    pub fn select_cluster(&mut self, cluster_id: Option<String>) {
        self.cluster_id = cluster_id;
        self.facility_id = None;
        self.category_id = None;
        self.brand = None;
    }

    /// Query для матрицы; без кластера выборки нет
    pub fn to_query(&self) -> Option<PricingFilterQuery> {
        let cluster_id = self.cluster_id.clone()?;
        Some(PricingFilterQuery {
            cluster_id,
            facility_id: self.facility_id.clone(),
            category_id: self.category_id.clone(),
            brand: self.brand.clone(),
        })
    }
}

/// Разбор наценки из поля ввода: число в (0; 1000]
pub fn parse_margin(input: &str) -> Result<f64, String> {
    let value: f64 = input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| "Наценка должна быть числом".to_string())?;
    if value <= 0.0 {
        return Err("Наценка должна быть больше нуля".to_string());
    }
    if value > 1000.0 {
        return Err("Наценка не может превышать 1000%".to_string());
    }
    Ok(value)
}

pub fn create_state() -> RwSignal<PricingState> {
    RwSignal::new(PricingState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_cluster_resets_downstream() {
        let mut state = PricingState {
            cluster_id: Some("c-1".into()),
            facility_id: Some("f-1".into()),
            category_id: Some("cat-1".into()),
            brand: Some("Aqua".into()),
        };
        state.select_cluster(Some("c-2".into()));
        assert_eq!(state.cluster_id.as_deref(), Some("c-2"));
        assert!(state.facility_id.is_none());
        assert!(state.category_id.is_none());
        assert!(state.brand.is_none());
    }

    #[test]
    fn test_to_query_requires_cluster() {
        let state = PricingState::default();
        assert!(state.to_query().is_none());

        let state = PricingState {
            cluster_id: Some("c-1".into()),
            brand: Some("Aqua".into()),
            ..Default::default()
        };
        let query = state.to_query().unwrap();
        assert_eq!(query.cluster_id, "c-1");
        assert_eq!(query.brand.as_deref(), Some("Aqua"));
        assert!(query.facility_id.is_none());
    }

    #[test]
    fn test_parse_margin() {
        assert_eq!(parse_margin("15"), Ok(15.0));
        assert_eq!(parse_margin(" 7,5 "), Ok(7.5));
        assert!(parse_margin("0").is_err());
        assert!(parse_margin("-3").is_err());
        assert!(parse_margin("1001").is_err());
        assert!(parse_margin("abc").is_err());
    }
}
