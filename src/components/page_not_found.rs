//! 404 Screen

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn PageNotFound() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <div class="not-found-card">
                <h1 class="not-found-code">"404"</h1>
                <h2 class="not-found-title">"Oops! Page Not Found"</h2>
                <p class="not-found-text">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <A href="/" attr:class="home-link">"Go Back Home"</A>
            </div>
        </div>
    }
}
