use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductListState {
    pub page: usize,
    pub page_size: usize,
    pub search: String,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 50,
            search: String::new(),
        }
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
