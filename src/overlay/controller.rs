//! Wires a host UI runtime to the overlay state machine.

use crate::search::SearchIndex;
use std::sync::Arc;

use super::keys::{HostEvent, Shortcut, route};
use super::state::{Effect, SearchUiState, transition};

/// Capabilities the hosting application lends to the quick-navigation overlay.
pub trait Host {
    /// Change the current route to `path`, verbatim.
    fn navigate(&mut self, path: &str);

    /// Hide the overlay surface.
    fn close_overlay(&mut self);

    /// Move keyboard focus into the search input.
    fn focus_input(&mut self);

    /// Start delivering page-wide key presses.
    fn listen_global_keys(&mut self) {}

    /// Stop delivering page-wide key presses.
    fn unlisten_global_keys(&mut self) {}
}

impl<H: Host + ?Sized> Host for &mut H {
    fn navigate(&mut self, path: &str) {
        (**self).navigate(path);
    }

    fn close_overlay(&mut self) {
        (**self).close_overlay();
    }

    fn focus_input(&mut self) {
        (**self).focus_input();
    }

    fn listen_global_keys(&mut self) {
        (**self).listen_global_keys();
    }

    fn unlisten_global_keys(&mut self) {
        (**self).unlisten_global_keys();
    }
}

/// A mounted quick-navigation overlay.
///
/// The global key listener is registered once in [`QuickSearch::mount`] and
/// released when the controller is dropped.
pub struct QuickSearch<H: Host> {
    index: Arc<SearchIndex>,
    shortcut: Shortcut,
    state: SearchUiState,
    host: H,
}

impl<H: Host> std::fmt::Debug for QuickSearch<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuickSearch")
            .field("records", &self.index.len())
            .field("shortcut", &self.shortcut)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<H: Host> QuickSearch<H> {
    /// Mount the overlay over a prebuilt index.
    pub fn mount(index: Arc<SearchIndex>, shortcut: Shortcut, mut host: H) -> Self {
        host.listen_global_keys();
        tracing::debug!(
            "Mounted quick search ({} records, open with {})",
            index.len(),
            shortcut
        );
        Self {
            index,
            shortcut,
            state: SearchUiState::default(),
            host,
        }
    }

    pub fn state(&self) -> &SearchUiState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Feed one raw host event through routing, the state machine, and the
    /// resulting effects.
    pub fn handle(&mut self, event: HostEvent) {
        let Some(event) = route(event, &self.shortcut, self.state.is_open) else {
            return;
        };

        tracing::trace!("Overlay event: {:?}", event);
        let state = std::mem::take(&mut self.state);
        let outcome = transition(state, event, &self.index);
        self.state = outcome.state;

        for effect in outcome.effects {
            match effect {
                Effect::FocusInput => self.host.focus_input(),
                Effect::Navigate(path) => {
                    tracing::debug!("Navigating to {}", path);
                    self.host.navigate(&path);
                }
                Effect::Dismiss => self.host.close_overlay(),
            }
        }
    }
}

impl<H: Host> Drop for QuickSearch<H> {
    fn drop(&mut self) {
        self.host.unlisten_global_keys();
        tracing::trace!("Quick search unmounted");
    }
}
