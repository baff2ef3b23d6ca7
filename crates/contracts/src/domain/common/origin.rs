use serde::{Deserialize, Serialize};

/// Источник данных для агрегата
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Собственная система (консоль — единственный редактор)
    #[serde(rename = "self")]
    Self_,
    /// Импорт из учётной ERP-системы
    Erp,
    /// Данные, дополненные внешним сервисом обогащения
    Enrichment,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Self_ => "self",
            Origin::Erp => "erp",
            Origin::Enrichment => "enrichment",
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
