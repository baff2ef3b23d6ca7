use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api::ApiClient;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Centralized modal and toast stacks
    provide_context(ModalStackService::new());
    let toasts = ToastService::new();
    provide_context(toasts);

    // Typed API client: auth header + error interception live here
    provide_context(ApiClient::new(toasts));

    view! {
        <AuthProvider>
            <AppRoutes />
            <ModalHost />
            <ToastHost />
        </AuthProvider>
    }
}
