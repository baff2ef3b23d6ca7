use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct FacilityListState {
    pub sort_field: String,
    pub sort_ascending: bool,
    pub filter: String,
}

impl Default for FacilityListState {
    fn default() -> Self {
        Self {
            sort_field: "code".to_string(),
            sort_ascending: true,
            filter: String::new(),
        }
    }
}

pub fn create_state() -> RwSignal<FacilityListState> {
    RwSignal::new(FacilityListState::default())
}
