//! The quick-navigation overlay: selection state machine plus the thin adapter
//! that connects it to a host UI runtime.

pub mod controller;
pub mod keys;
pub mod state;

pub use controller::{Host, QuickSearch};
pub use keys::{HostEvent, Key, KeyPress, Modifier, Modifiers, Shortcut, route};
pub use state::{
    EMPTY_GUIDANCE, Effect, NO_RESULTS_GUIDANCE, OverlayEvent, OverlayView, SearchUiState,
    Transition, transition,
};
