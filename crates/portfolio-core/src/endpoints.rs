//! REST Endpoint Table
//!
//! Paths consumed from the backend. Identifiers are encoded as a single path
//! segment so a stray `/` or `?` in an id can't address another route.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside one path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub const LOGIN: &str = "/api/users/login";
pub const REGISTER: &str = "/api/users/register";
pub const PROJECTS: &str = "/api/projects";
pub const BLOG: &str = "/api/blog";
pub const CONTACT: &str = "/api/contact";

/// `{collection}/{id}`
pub fn member(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, utf8_percent_encode(id, SEGMENT))
}

pub fn project(id: &str) -> String {
    member(PROJECTS, id)
}

pub fn blog_post(id: &str) -> String {
    member(BLOG, id)
}

pub fn blog_comments(post_id: &str) -> String {
    format!("{}/comments", member(BLOG, post_id))
}
