//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use portfolio_core::copy::REGISTER;
use portfolio_core::forms::RegisterForm;
use portfolio_core::FormFlow;

use crate::api;
use crate::components::{BannerMessage, FieldError, TextField};
use crate::context::use_auth;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let flow = RwSignal::new(FormFlow::<RegisterForm>::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(registration) = flow.try_update(|f| f.submit()).flatten() else {
            return;
        };
        let client = auth.client();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::register(&client, &registration).await.map(|session| auth.sign_in(session));
            if let Err(e) = &result {
                log::warn!("[Register] failed: {}", e);
            }
            let ok = flow.try_update(|f| f.finish(result, &REGISTER)).unwrap_or(false);
            if ok {
                navigate("/", Default::default());
            }
        });
    };

    let submitting = move || flow.with(|f| f.status().is_submitting());
    let (name, set_name) = flow_field!(flow, name);
    let (email, set_email) = flow_field!(flow, email);
    let (password, set_password) = flow_field!(flow, password);
    let (confirm_password, set_confirm_password) = flow_field!(flow, confirm_password);

    view! {
        <div class="auth-page">
            <h1>"Register"</h1>
            <BannerMessage banner=Signal::derive(move || flow.with(|f| f.status().banner())) />
            <form on:submit=submit>
                <TextField label="Name" value=name on_input=set_name />
                <TextField label="Email" kind="email" value=email on_input=set_email />
                <TextField label="Password" kind="password" value=password on_input=set_password />
                <TextField
                    label="Confirm Password"
                    kind="password"
                    value=confirm_password
                    on_input=set_confirm_password
                />
                <FieldError message=Signal::derive(move || flow.with(|f| f.invalid().map(ToString::to_string))) />
                <button type="submit" disabled=submitting>
                    {move || if submitting() { "Creating account..." } else { "Register" }}
                </button>
            </form>
            <p class="auth-switch">
                "Already have an account? "
                <A href="/login">"Login"</A>
            </p>
        </div>
    }
}
