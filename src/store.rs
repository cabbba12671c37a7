//! Admin Console Store
//!
//! The console state lives in a reactive_stores `Store` created by the admin
//! page, so it is discarded when the viewer navigates away.

use leptos::prelude::*;
use portfolio_core::admin::AdminConsole;
use reactive_stores::Store;

/// Type alias for the store
pub type AdminStore = Store<AdminConsole>;

/// Create the store and provide it to the admin subtree
pub fn provide_admin_store() -> AdminStore {
    let store = Store::new(AdminConsole::new());
    provide_context(store);
    store
}

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}
