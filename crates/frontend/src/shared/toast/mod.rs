use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Время жизни тоста до автоскрытия, мс
const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast--success",
            ToastLevel::Error => "toast toast--error",
            ToastLevel::Info => "toast toast--info",
        }
    }
}

#[derive(Clone)]
struct ToastEntry {
    id: u64,
    level: ToastLevel,
    message: String,
}

/// Централизованный стек уведомлений.
///
/// Единственный механизм показа ошибок HTTP-обмена: API-клиент кладёт сюда
/// сообщение, экран лишь перечитывает данные по действию пользователя.
#[derive(Clone, Copy)]
pub struct ToastService {
    items: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn push(&self, level: ToastLevel, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.items.update(|items| {
            items.push(ToastEntry {
                id,
                level,
                message: message.into(),
            });
        });

        // Автоскрытие: отдельная задача на каждый тост
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            svc.close(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }

    pub fn close(&self, id: u64) {
        self.items.update(|items| {
            items.retain(|t| t.id != id);
        });
    }
}

/// Хук доступа к сервису уведомлений
pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the toast stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toasts();

    view! {
        <div class="toast-host" style="position: fixed; right: 16px; bottom: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 2000;">
            <For
                each=move || svc.items.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div
                            class=entry.level.css_class()
                            style="min-width: 260px; max-width: 420px; padding: 10px 14px; border-radius: 4px; box-shadow: 0 2px 8px rgba(0,0,0,0.25); cursor: pointer; background: #333; color: #fff;"
                            on:click=move |_| svc.close(id)
                            title="Закрыть"
                        >
                            {entry.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
