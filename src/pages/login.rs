//! Login Page
//!
//! Exchanges credentials for a session, hands it to the auth context and
//! continues to the admin console.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use portfolio_core::copy::LOGIN;
use portfolio_core::forms::LoginForm;
use portfolio_core::FormFlow;

use crate::api;
use crate::components::{BannerMessage, FieldError, TextField};
use crate::context::use_auth;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let flow = RwSignal::new(FormFlow::<LoginForm>::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = flow.try_update(|f| f.submit()).flatten() else {
            return;
        };
        let client = auth.client();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::login(&client, &credentials).await.map(|session| auth.sign_in(session));
            if let Err(e) = &result {
                log::warn!("[Login] failed: {}", e);
            }
            let ok = flow.try_update(|f| f.finish(result, &LOGIN)).unwrap_or(false);
            if ok {
                navigate("/admin", Default::default());
            }
        });
    };

    let submitting = move || flow.with(|f| f.status().is_submitting());
    let (email, set_email) = flow_field!(flow, email);
    let (password, set_password) = flow_field!(flow, password);

    view! {
        <div class="auth-page">
            <h1>"Login"</h1>
            <BannerMessage banner=Signal::derive(move || flow.with(|f| f.status().banner())) />
            <form on:submit=submit>
                <TextField label="Email" kind="email" value=email on_input=set_email />
                <TextField label="Password" kind="password" value=password on_input=set_password />
                <FieldError message=Signal::derive(move || flow.with(|f| f.invalid().map(ToString::to_string))) />
                <button type="submit" disabled=submitting>
                    {move || if submitting() { "Logging in..." } else { "Login" }}
                </button>
            </form>
            <p class="auth-switch">
                "Don't have an account? "
                <A href="/register">"Register"</A>
            </p>
        </div>
    }
}
