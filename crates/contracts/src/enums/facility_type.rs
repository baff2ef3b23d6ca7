use serde::{Deserialize, Serialize};

/// Типы торговых объектов сети
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityType {
    Store,
    Warehouse,
    DarkStore,
}

impl FacilityType {
    /// Получить код типа объекта
    pub fn code(&self) -> &'static str {
        match self {
            FacilityType::Store => "store",
            FacilityType::Warehouse => "warehouse",
            FacilityType::DarkStore => "dark-store",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            FacilityType::Store => "Магазин",
            FacilityType::Warehouse => "Склад",
            FacilityType::DarkStore => "Дарксток",
        }
    }

    /// Получить все типы объектов
    pub fn all() -> Vec<FacilityType> {
        vec![
            FacilityType::Store,
            FacilityType::Warehouse,
            FacilityType::DarkStore,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "store" => Some(FacilityType::Store),
            "warehouse" => Some(FacilityType::Warehouse),
            "dark-store" => Some(FacilityType::DarkStore),
            _ => None,
        }
    }
}

impl std::fmt::Display for FacilityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for ft in FacilityType::all() {
            assert_eq!(FacilityType::from_code(ft.code()), Some(ft));
        }
        assert_eq!(FacilityType::from_code("kiosk"), None);
    }
}
