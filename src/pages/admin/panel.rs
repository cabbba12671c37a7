//! Resource Panel View
//!
//! Header toggle, create/edit form and record table shared by both admin
//! tabs. Per-resource pieces (form fields, table cells, wording) are passed in.

use leptos::prelude::*;
use portfolio_core::admin::Managed;
use portfolio_core::ListPhase;

use super::actions;
use crate::components::{ErrorMessage, FieldError, Loading};
use crate::context::AuthContext;
use crate::store::AdminStore;

/// Headings and button labels of one panel
pub struct PanelLabels {
    pub heading: &'static str,
    pub add: &'static str,
    pub add_heading: &'static str,
    pub edit_heading: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub columns: [&'static str; 3],
}

pub fn resource_panel<R: Managed>(
    store: AdminStore,
    auth: AuthContext,
    labels: &'static PanelLabels,
    fields: fn(AdminStore) -> AnyView,
    cells: fn(&R) -> [String; 3],
) -> impl IntoView {
    // Memos keep keystrokes in the form from re-rendering the table and form shell
    let list = Memo::new(move |_| store.with(|c| c.panel::<R>().list().clone()));
    let form_visible = Memo::new(move |_| store.with(|c| c.panel::<R>().editor().is_visible()));
    let editing = Memo::new(move |_| store.with(|c| c.panel::<R>().editor().target().is_some()));
    let pending = Memo::new(move |_| store.with(|c| c.panel::<R>().is_pending()));
    let invalid = Signal::derive(move || store.with(|c| c.panel::<R>().invalid().map(ToString::to_string)));

    let toggle = move |_: leptos::ev::MouseEvent| store.update(|c| c.panel_mut::<R>().toggle_form());
    let cancel = move |_: leptos::ev::MouseEvent| store.update(|c| c.panel_mut::<R>().cancel());
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        actions::submit::<R>(store, auth);
    };

    let form = move || {
        form_visible.get().then(|| {
            view! {
                <div class="admin-form-card">
                    <h3>{move || if editing.get() { labels.edit_heading } else { labels.add_heading }}</h3>
                    <form on:submit=on_submit>
                        {fields(store)}
                        <FieldError message=invalid />
                        <div class="form-actions">
                            <button type="submit" disabled=move || pending.get()>
                                {move || if editing.get() { labels.update } else { labels.create }}
                            </button>
                            <button type="button" on:click=cancel>"Cancel"</button>
                        </div>
                    </form>
                </div>
            }
        })
    };

    let rows = move || {
        list.with(|state| match state.phase() {
            ListPhase::Loading => view! { <tr><td colspan="4"><Loading message="Loading..." /></td></tr> }.into_any(),
            ListPhase::Errored(message) => {
                view! { <tr><td colspan="4"><ErrorMessage message=message.to_string() /></td></tr> }.into_any()
            }
            ListPhase::Empty => view! { <tr><td colspan="4" class="empty-state">{R::COPY.empty}</td></tr> }.into_any(),
            ListPhase::Items(records) => records
                .iter()
                .map(|record| record_row(store, auth, record, cells))
                .collect_view()
                .into_any(),
        })
    };

    view! {
        <div class="admin-panel">
            <div class="admin-panel-header">
                <h2>{labels.heading}</h2>
                <button on:click=toggle>
                    {move || if form_visible.get() { "Cancel" } else { labels.add }}
                </button>
            </div>
            {form}
            <table class="admin-table">
                <thead>
                    <tr>
                        {labels.columns.iter().map(|column| view! { <th>{*column}</th> }).collect_view()}
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

fn record_row<R: Managed>(
    store: AdminStore,
    auth: AuthContext,
    record: &R,
    cells: fn(&R) -> [String; 3],
) -> impl IntoView {
    let id = record.record_id().to_string();
    let editable = record.clone();
    let [first, second, third] = cells(record);

    view! {
        <tr>
            <td>{first}</td>
            <td>{second}</td>
            <td>{third}</td>
            <td class="admin-actions">
                <button class="edit-btn" on:click=move |_| { actions::begin_edit::<R>(store, &editable) }>
                    "Edit"
                </button>
                <button class="delete-btn" on:click=move |_| { actions::delete::<R>(store, auth, id.clone()) }>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
