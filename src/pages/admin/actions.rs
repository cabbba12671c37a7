//! Admin Round Trips
//!
//! Each action asks the console state for an intent, performs the request and
//! feeds the outcome back. A successful mutation re-fetches the active list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_core::admin::{AdminTab, Managed, Mutation};
use portfolio_core::models::{BlogPost, Project};
use portfolio_core::PayloadOf;

use crate::api;
use crate::components::confirm;
use crate::context::AuthContext;
use crate::store::AdminStore;

/// Fetch the list behind a tab (already put in `Loading` by the console)
pub fn fetch_tab(store: AdminStore, auth: AuthContext, tab: AdminTab) {
    match tab {
        AdminTab::Projects => fetch_list::<Project>(store, auth),
        AdminTab::Posts => fetch_list::<BlogPost>(store, auth),
    }
}

/// Switch tabs; re-selecting the active tab does nothing
pub fn select_tab(store: AdminStore, auth: AuthContext, tab: AdminTab) {
    if store.with_untracked(|c| c.tab) == tab {
        return;
    }
    if let Some(tab) = store.try_update(|c| c.select_tab(tab)) {
        fetch_tab(store, auth, tab);
    }
}

fn fetch_list<R: Managed>(store: AdminStore, auth: AuthContext) {
    let client = auth.client();
    spawn_local(async move {
        let result = api::list::<R>(&client).await;
        match &result {
            Ok(records) => log::debug!("[Admin] loaded {} from {}", records.len(), R::COLLECTION),
            Err(e) => log::warn!("[Admin] load {} failed: {}", R::COLLECTION, e),
        }
        store.update(|c| c.finish_fetch::<R>(result));
    });
}

/// Submit the panel's form buffer as a create or update
pub fn submit<R: Managed>(store: AdminStore, auth: AuthContext) {
    if let Some(mutation) = store.try_update(|c| c.submit::<R>()).flatten() {
        run_mutation::<R>(store, auth, mutation);
    }
}

/// Load a record into the panel's form
pub fn begin_edit<R: Managed>(store: AdminStore, record: &R) {
    store.update(|c| c.panel_mut::<R>().begin_edit(record));
}

/// Delete one record after a blocking confirmation
pub fn delete<R: Managed>(store: AdminStore, auth: AuthContext, id: String) {
    let confirmed = confirm(R::COPY.confirm_delete);
    if let Some(mutation) = store.try_update(|c| c.delete::<R>(&id, confirmed)).flatten() {
        run_mutation::<R>(store, auth, mutation);
    }
}

fn run_mutation<R: Managed>(store: AdminStore, auth: AuthContext, mutation: Mutation<PayloadOf<R>>) {
    let client = auth.client();
    spawn_local(async move {
        let kind = mutation.kind();
        let result = api::apply::<R>(&client, &mutation).await;
        match &result {
            Ok(()) => log::info!("[Admin] {:?} on {} succeeded", kind, R::COLLECTION),
            Err(e) => log::warn!("[Admin] {:?} on {} failed: {}", kind, R::COLLECTION, e),
        }
        let refetch = store.try_update(|c| c.finish_mutation::<R>(kind, result)).unwrap_or(false);
        if refetch {
            fetch_list::<R>(store, auth);
        }
    });
}
