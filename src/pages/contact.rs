//! Contact Page
//!
//! Contact details plus one outbound message form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_core::copy::CONTACT;
use portfolio_core::forms::ContactForm;
use portfolio_core::FormFlow;

use crate::api;
use crate::components::{BannerMessage, FieldError, TextField};
use crate::context::use_auth;

#[component]
pub fn ContactPage() -> impl IntoView {
    let auth = use_auth();
    let flow = RwSignal::new(FormFlow::<ContactForm>::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(message) = flow.try_update(|f| f.submit()).flatten() else {
            return;
        };
        let client = auth.client();
        spawn_local(async move {
            let result = api::send_contact(&client, &message).await;
            if let Err(e) = &result {
                log::warn!("[Contact] send failed: {}", e);
            }
            flow.update(|f| {
                f.finish(result, &CONTACT);
            });
        });
    };

    let submitting = move || flow.with(|f| f.status().is_submitting());
    let invalid = Signal::derive(move || flow.with(|f| f.invalid().map(ToString::to_string)));
    let (name, set_name) = flow_field!(flow, name);
    let (email, set_email) = flow_field!(flow, email);
    let (subject, set_subject) = flow_field!(flow, subject);
    let (message, set_message) = flow_field!(flow, message);

    view! {
        <div class="contact-page">
            <div class="page-header">
                <h1>"Contact Me"</h1>
                <p>"Have a question or want to work together? Feel free to reach out!"</p>
            </div>

            <div class="contact-grid">
                <div class="contact-form-card">
                    <h2>"Send a Message"</h2>
                    <BannerMessage banner=Signal::derive(move || flow.with(|f| f.status().banner())) />
                    <form on:submit=submit>
                        <TextField label="Name" value=name on_input=set_name placeholder="Your name" />
                        <TextField
                            label="Email"
                            kind="email"
                            value=email
                            on_input=set_email
                            placeholder="your.email@example.com"
                        />
                        <TextField
                            label="Subject"
                            value=subject
                            on_input=set_subject
                            placeholder="What is this about?"
                        />
                        <TextField
                            label="Message"
                            value=message
                            on_input=set_message
                            placeholder="Your message here..."
                            rows=6
                        />
                        <FieldError message=invalid />
                        <button type="submit" disabled=submitting>
                            {move || if submitting() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </div>

                <div class="contact-info">
                    <div class="contact-info-card">
                        <h2>"Contact Information"</h2>
                        <div class="contact-item">
                            <h3>"Email"</h3>
                            <p>"contact@portfolio.com"</p>
                        </div>
                        <div class="contact-item">
                            <h3>"Location"</h3>
                            <p>"Available for remote work worldwide"</p>
                        </div>
                    </div>
                    <div class="contact-connect">
                        <h2>"Let's Connect"</h2>
                        <p>"I'm always interested in hearing about new projects and opportunities."</p>
                        <a href="https://github.com" target="_blank" rel="noopener noreferrer">"GitHub"</a>
                        <a href="https://linkedin.com" target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                        <a href="https://twitter.com" target="_blank" rel="noopener noreferrer">"Twitter"</a>
                    </div>
                </div>
            </div>
        </div>
    }
}
