use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ClusterListState {
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for ClusterListState {
    fn default() -> Self {
        Self {
            sort_field: "code".to_string(),
            sort_ascending: true,
        }
    }
}

pub fn create_state() -> RwSignal<ClusterListState> {
    RwSignal::new(ClusterListState::default())
}
