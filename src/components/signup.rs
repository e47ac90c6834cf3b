//! Signup Screen
//!
//! Registration form; on success the token is stored and the user is sent to login.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::{self, ApiClient};
use crate::auth;
use crate::models::SignupRequest;
use crate::toast::use_toaster;

#[component]
pub fn Signup() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let toaster = use_toaster();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        let username_value = username.get();
        let email_value = email.get();
        let password_value = password.get();

        spawn_local(async move {
            let args = SignupRequest {
                username: &username_value,
                email: &email_value,
                password: &password_value,
            };
            match api::signup(&client, &args).await {
                Ok(data) => {
                    if let Some(token) = auth::session_token(&data) {
                        auth::store_token(token);
                    }
                    toaster.success(data.message.unwrap_or_else(|| "User registered successfully".to_string()));
                    // Form is unmounted after navigating
                    navigate("/login", Default::default());
                    let _ = set_username.try_set(String::new());
                    let _ = set_email.try_set(String::new());
                    let _ = set_password.try_set(String::new());
                }
                Err(e) => {
                    log::warn!("[SIGNUP] {}", e);
                    toaster.error(e.user_message("User registration failed"));
                }
            }
        });
    };

    view! {
        <div class="auth-page signup">
            <div class="auth-card">
                <h2 class="auth-title">"Create Account"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <div class="field">
                        <label>"Username"</label>
                        <input
                            type="text"
                            placeholder="Choose a username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>

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
                            placeholder="Create a password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <button type="submit" class="auth-submit">"Signup"</button>

                    <p class="auth-switch">
                        "Already have an account? "
                        <A href="/login">"Login"</A>
                    </p>
                </form>
            </div>
        </div>
    }
}
