//! Admin Console
//!
//! Two independent resource panels behind a tab selector, sharing one banner
//! slot. Only the active tab is fetched and rendered; the inactive panel keeps
//! whatever it last loaded.

use reactive_stores::Store;

use super::panel::{Mutation, MutationKind, ResourcePanel};
use crate::error::RequestError;
use crate::models::{BlogPost, Project};
use crate::resource::{PayloadOf, Resource};
use crate::submission::Banner;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AdminTab {
    #[default]
    Projects,
    Posts,
}

impl AdminTab {
    pub const ALL: [AdminTab; 2] = [AdminTab::Projects, AdminTab::Posts];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Projects => "Manage Projects",
            AdminTab::Posts => "Manage Blog Posts",
        }
    }
}

/// Console state, exposed as a reactive store to the dashboard
#[derive(Debug, Clone, Default, Store)]
pub struct AdminConsole {
    pub tab: AdminTab,
    pub banner: Option<Banner>,
    pub projects: ResourcePanel<Project>,
    pub posts: ResourcePanel<BlogPost>,
}

/// Resources with a panel in the console
pub trait Managed: Resource {
    const TAB: AdminTab;

    fn panel(console: &AdminConsole) -> &ResourcePanel<Self>;
    fn panel_mut(console: &mut AdminConsole) -> &mut ResourcePanel<Self>;
}

impl Managed for Project {
    const TAB: AdminTab = AdminTab::Projects;

    fn panel(console: &AdminConsole) -> &ResourcePanel<Self> {
        &console.projects
    }

    fn panel_mut(console: &mut AdminConsole) -> &mut ResourcePanel<Self> {
        &mut console.projects
    }
}

impl Managed for BlogPost {
    const TAB: AdminTab = AdminTab::Posts;

    fn panel(console: &AdminConsole) -> &ResourcePanel<Self> {
        &console.posts
    }

    fn panel_mut(console: &mut AdminConsole) -> &mut ResourcePanel<Self> {
        &mut console.posts
    }
}

impl AdminConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel<R: Managed>(&self) -> &ResourcePanel<R> {
        R::panel(self)
    }

    pub fn panel_mut<R: Managed>(&mut self) -> &mut ResourcePanel<R> {
        R::panel_mut(self)
    }

    /// Console became visible: fetch the active tab
    pub fn mount(&mut self) -> AdminTab {
        self.select_tab(self.tab)
    }

    /// Activate a tab and put its list into `Loading`.
    ///
    /// Returns the tab whose list must be fetched. The other panel is left
    /// untouched. A stale error banner is cleared; a success banner stays.
    pub fn select_tab(&mut self, tab: AdminTab) -> AdminTab {
        log::debug!("admin tab -> {:?}", tab);
        self.tab = tab;
        if self.banner.as_ref().is_some_and(Banner::is_error) {
            self.banner = None;
        }
        match tab {
            AdminTab::Projects => self.projects.begin_fetch(),
            AdminTab::Posts => self.posts.begin_fetch(),
        }
        tab
    }

    pub fn finish_fetch<R: Managed>(&mut self, result: Result<Vec<R>, RequestError>) {
        self.panel_mut::<R>().finish_fetch(result);
    }

    /// Create/update for the active buffer; clears the banner when issued
    pub fn submit<R: Managed>(&mut self) -> Option<Mutation<PayloadOf<R>>> {
        let mutation = self.panel_mut::<R>().submit()?;
        self.banner = None;
        Some(mutation)
    }

    /// Delete after confirmation; clears the banner when issued
    pub fn delete<R: Managed>(&mut self, id: &str, confirmed: bool) -> Option<Mutation<PayloadOf<R>>> {
        let mutation = self.panel_mut::<R>().delete(id, confirmed)?;
        self.banner = None;
        Some(mutation)
    }

    /// Settle a mutation; true when the list was put into `Loading` and must
    /// be re-fetched.
    ///
    /// Only the active tab re-fetches. A panel left behind by a tab switch
    /// keeps its list until it is selected again.
    pub fn finish_mutation<R: Managed>(&mut self, kind: MutationKind, result: Result<(), RequestError>) -> bool {
        let ok = result.is_ok();
        let banner = self.panel_mut::<R>().finish_mutation(kind, result);
        self.banner = Some(banner);
        let refetch = ok && self.tab == R::TAB;
        if refetch {
            self.panel_mut::<R>().begin_fetch();
        }
        refetch
    }
}
