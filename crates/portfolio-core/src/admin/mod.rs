//! Admin Console State
//!
//! - panel: per-resource list/editor/mutation state
//! - console: tab selector and shared banner over both panels

mod console;
mod panel;

#[cfg(test)]
mod tests;

pub use console::{AdminConsole, AdminConsoleStoreFields, AdminTab, Managed};
pub use panel::{Editor, Mutation, MutationKind, ResourcePanel};
