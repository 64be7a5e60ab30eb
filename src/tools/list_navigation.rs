//! Navigation listing handler.

use crate::search::strip_group_title;
use crate::state::NavState;
use std::fmt::Write as _;

/// List every section and page the quick-navigation box can reach.
pub fn handle_list_navigation(state: &NavState) -> String {
    let navigation = state.navigation();
    if navigation.groups.is_empty() {
        return "No navigation entries configured.".to_string();
    }

    let mut out = format!(
        "{} sections, {} pages (open quick search with {}):\n",
        navigation.groups.len(),
        navigation.entry_count(),
        state.shortcut()
    );

    for group in &navigation.groups {
        let name = strip_group_title(&group.title);
        let _ = writeln!(out, "\n## {}", if name.is_empty() { "(untitled)" } else { name.as_str() });
        for entry in &group.entries {
            let _ = writeln!(out, "• {} → {}", entry.label, entry.path);
        }
    }
    out
}
