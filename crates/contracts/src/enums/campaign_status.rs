use serde::{Deserialize, Serialize};

/// Статусы промо-акции
///
/// Допустимость переходов проверяет сервер; клиент лишь запрашивает смену
/// статуса через отдельный эндпоинт.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CampaignStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Finished,
}

impl CampaignStatus {
    /// Получить код статуса
    pub fn code(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "draft",
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Finished => "finished",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "Черновик",
            CampaignStatus::Active => "Активна",
            CampaignStatus::Paused => "Приостановлена",
            CampaignStatus::Finished => "Завершена",
        }
    }

    /// Получить все статусы
    pub fn all() -> Vec<CampaignStatus> {
        vec![
            CampaignStatus::Draft,
            CampaignStatus::Active,
            CampaignStatus::Paused,
            CampaignStatus::Finished,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(CampaignStatus::Draft),
            "active" => Some(CampaignStatus::Active),
            "paused" => Some(CampaignStatus::Paused),
            "finished" => Some(CampaignStatus::Finished),
            _ => None,
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for st in CampaignStatus::all() {
            assert_eq!(CampaignStatus::from_code(st.code()), Some(st));
        }
        assert_eq!(CampaignStatus::from_code("archived"), None);
    }
}
