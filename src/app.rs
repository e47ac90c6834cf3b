//! Todo UI App
//!
//! Root component: context providers, toast host and routes.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::{Home, Login, PageNotFound, Signup, ToastHost};
use crate::config::AppConfig;
use crate::store::provide_todo_store;
use crate::toast::Toaster;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all children
    provide_context(ApiClient::new(&config));
    provide_context(Toaster::default());
    provide_todo_store();

    view! {
        <Router>
            <ToastHost />
            <Routes fallback=|| view! { <PageNotFound /> }>
                <Route path=path!("/") view=Home />
                <Route path=path!("/login") view=Login />
                <Route path=path!("/signup") view=Signup />
            </Routes>
        </Router>
    }
}
