//! Route Pages
//!
//! One component per route; each owns its fetch/submission state and drops it
//! on navigation.

/// Bind a field of a `FormFlow` held in a signal: `(value, on_input)`
macro_rules! flow_field {
    ($flow:expr, $name:ident) => {{
        let flow = $flow;
        (
            Signal::derive(move || flow.with(|f| f.form.$name.clone())),
            Callback::new(move |value: String| flow.update(|f| f.form.$name = value)),
        )
    }};
}

/// Bind a field of an admin panel's form buffer: `(value, on_input)`
macro_rules! panel_field {
    ($store:expr, $resource:ty, $name:ident) => {{
        let store = $store;
        (
            Signal::derive(move || {
                store.with(|c| {
                    c.panel::<$resource>()
                        .editor()
                        .form()
                        .map(|f| f.$name.clone())
                        .unwrap_or_default()
                })
            }),
            Callback::new(move |value: String| {
                store.update(|c| c.panel_mut::<$resource>().edit(|f| f.$name = value))
            }),
        )
    }};
}

mod admin;
mod blog;
mod blog_detail;
mod contact;
mod home;
mod login;
mod not_found;
mod projects;
mod register;

pub use admin::AdminDashboard;
pub use blog::BlogPage;
pub use blog_detail::BlogDetailPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use projects::ProjectsPage;
pub use register::RegisterPage;
