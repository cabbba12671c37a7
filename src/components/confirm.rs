//! Blocking Confirmation Prompt

use leptos::prelude::*;

/// Ask a yes/no question; anything but an explicit yes counts as no
pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or_else(|_| {
        log::warn!("[Confirm] prompt unavailable, treating as declined");
        false
    })
}
