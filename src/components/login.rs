//! Login Screen
//!
//! Email/password form; a successful login stores the token and opens the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::{self, ApiClient};
use crate::auth;
use crate::models::LoginRequest;
use crate::toast::use_toaster;

#[component]
pub fn Login() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let toaster = use_toaster();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        let email_value = email.get();
        let password_value = password.get();

        spawn_local(async move {
            let args = LoginRequest { email: &email_value, password: &password_value };
            match api::login(&client, &args).await {
                Ok(data) => {
                    if let Some(token) = auth::session_token(&data) {
                        auth::store_token(token);
                    }
                    toaster.success(data.message.unwrap_or_else(|| "Logged in successfully".to_string()));
                    // Form is unmounted after navigating
                    navigate("/", Default::default());
                    let _ = set_email.try_set(String::new());
                    let _ = set_password.try_set(String::new());
                }
                Err(e) => {
                    log::warn!("[LOGIN] {}", e);
                    toaster.error(e.user_message("Login failed. Try again."));
                }
            }
        });
    };

    view! {
        <div class="auth-page login">
            <div class="auth-card">
                <h2 class="auth-title">"Welcome Back 👋"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <div class="field">
                        <label>"Email"</label>
                        <input
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="field">
                        <label>"Password"</label>
                        <input
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="auth-submit">"Login"</button>

                    <p class="auth-switch">
                        "Don't have an account? "
                        <A href="/signup">"Sign up"</A>
                    </p>
                </form>
            </div>
        </div>
    }
}
