use crate::system::auth::context::{do_login, use_auth};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Страница входа. Показывается вместо оболочки, пока нет access token.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let submit = move || {
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() {
            set_error.set(Some("Введите логин и пароль".to_string()));
            return;
        }
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match do_login(set_auth_state, user, pass).await {
                Ok(()) => {}
                Err(e) => set_error.set(Some(format!("Не удалось войти: {}", e))),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="login-page" style="min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #f5f6f8;">
            <div class="login-card" style="width: 360px; background: white; border-radius: 8px; padding: 28px; box-shadow: 0 4px 16px rgba(0,0,0,0.08);">
                <h2 style="margin: 0 0 4px 0;">{"Консоль управления сетью"}</h2>
                <div style="color: #888; margin-bottom: 20px;">{"Вход для сотрудников"}</div>

                {move || error.get().map(|e| view! { <div class="error" style="background: #fee; color: #c33; padding: 10px; border-radius: 4px; margin-bottom: 12px;">{e}</div> })}

                <div class="form-group">
                    <label for="login-username">{"Логин"}</label>
                    <input
                        type="text"
                        id="login-username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        placeholder="username"
                    />
                </div>

                <div class="form-group">
                    <label for="login-password">{"Пароль"}</label>
                    <input
                        type="password"
                        id="login-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                    />
                </div>

                <button
                    class="btn btn-primary"
                    style="width: 100%; margin-top: 8px;"
                    disabled=move || busy.get()
                    on:click=move |_| submit()
                >
                    {move || if busy.get() { "Вход..." } else { "Войти" }}
                </button>
            </div>
        </div>
    }
}
