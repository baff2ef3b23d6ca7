use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct CampaignListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for CampaignListState {
    fn default() -> Self {
        Self {
            sort_field: "starts_at".to_string(),
            sort_ascending: false,
        }
    }
}

pub fn create_state() -> RwSignal<CampaignListState> {
    RwSignal::new(CampaignListState::default())
}
