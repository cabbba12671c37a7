//! UI Components
//!
//! Reusable Leptos components.

mod banner;
mod blog_post_card;
mod confirm;
mod field;
mod header;
mod list_view;
mod project_card;
mod status;
mod tag_list;

pub use banner::BannerMessage;
pub use blog_post_card::BlogPostCard;
pub use confirm::confirm;
pub use field::{FieldError, TextField};
pub use header::Header;
pub use list_view::render_list;
pub use project_card::ProjectCard;
pub use status::{ErrorMessage, Loading};
pub use tag_list::TagList;
