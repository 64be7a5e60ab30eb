//! Selection state machine for the quick-navigation overlay.
//!
//! All state changes go through [`transition`], a pure function of the current
//! state, one event, and the (read-only) index. Side effects are returned as
//! [`Effect`]s for the host adapter to carry out.

use crate::search::{SearchIndex, SearchResult};

/// Guidance shown while the query is empty.
pub const EMPTY_GUIDANCE: &str = "Type to search pages and sections";

/// Guidance shown when a non-empty query matched nothing.
pub const NO_RESULTS_GUIDANCE: &str = "No matching pages. Try a shorter or different term";

/// Overlay state owned by the state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchUiState {
    pub is_open: bool,
    pub query: String,
    pub results: Vec<SearchResult>,
    /// Cursor into `results`; meaningless while `results` is empty
    pub selected_index: usize,
}

impl SearchUiState {
    /// The currently highlighted result, if any.
    pub fn selected(&self) -> Option<&SearchResult> {
        self.results.get(self.selected_index)
    }

    /// What the host should render for this state.
    pub fn view(&self) -> OverlayView<'_> {
        if !self.is_open {
            OverlayView::Hidden
        } else if self.query.is_empty() {
            OverlayView::Empty
        } else if self.results.is_empty() {
            OverlayView::NoResults { query: &self.query }
        } else {
            OverlayView::Results {
                rows: &self.results,
                selected: self.selected_index,
            }
        }
    }

    fn closed() -> Self {
        Self::default()
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self.selected_index.min(self.results.len().saturating_sub(1));
    }
}

/// Presentational derivation of [`SearchUiState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayView<'a> {
    Hidden,
    Empty,
    NoResults { query: &'a str },
    Results { rows: &'a [SearchResult], selected: usize },
}

impl OverlayView<'_> {
    /// Guidance text for the empty and no-results views.
    pub const fn guidance(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some(EMPTY_GUIDANCE),
            Self::NoResults { .. } => Some(NO_RESULTS_GUIDANCE),
            Self::Hidden | Self::Results { .. } => None,
        }
    }
}

/// Discrete inputs to the state machine, already routed by the host adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    /// Open-trigger shortcut
    Open,
    /// Escape, click outside, or the close control
    Close,
    /// The text input changed
    QueryChanged(String),
    /// Arrow-down
    SelectNext,
    /// Arrow-up
    SelectPrevious,
    /// Enter
    Confirm,
    /// Pointer hover over a result row
    Hover(usize),
    /// Pointer click on a result row
    Activate(usize),
}

/// Work the host must perform after a transition, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Move keyboard focus into the search input
    FocusInput,
    /// Route to this path, verbatim
    Navigate(String),
    /// Hide the overlay surface
    Dismiss,
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SearchUiState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: SearchUiState) -> Self {
        Self {
            state,
            effects: vec![],
        }
    }

    fn with(state: SearchUiState, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }
}

/// Apply one event to the overlay state.
///
/// Events whose precondition does not hold (opening an open overlay, Enter
/// with no results, hovering a row that no longer exists) leave the state
/// untouched and produce no effects.
pub fn transition(mut state: SearchUiState, event: OverlayEvent, index: &SearchIndex) -> Transition {
    match (state.is_open, event) {
        (false, OverlayEvent::Open) => {
            let opened = SearchUiState {
                is_open: true,
                ..SearchUiState::default()
            };
            Transition::with(opened, vec![Effect::FocusInput])
        }
        (false, _) | (true, OverlayEvent::Open) => Transition::unchanged(state),

        (true, OverlayEvent::Close) => Transition::with(SearchUiState::closed(), vec![Effect::Dismiss]),

        (true, OverlayEvent::QueryChanged(query)) => {
            state.results = index.search(&query);
            state.query = query;
            state.selected_index = 0;
            Transition::unchanged(state)
        }

        (true, OverlayEvent::SelectNext) => {
            if !state.results.is_empty() {
                state.selected_index = (state.selected_index + 1).min(state.results.len() - 1);
            }
            Transition::unchanged(state)
        }

        (true, OverlayEvent::SelectPrevious) => {
            if !state.results.is_empty() {
                state.selected_index = state.selected_index.saturating_sub(1);
                state.clamp_selection();
            }
            Transition::unchanged(state)
        }

        (true, OverlayEvent::Confirm) => {
            let row = state.selected_index;
            navigate_to(state, row)
        }

        (true, OverlayEvent::Hover(row)) => {
            if row < state.results.len() {
                state.selected_index = row;
            }
            Transition::unchanged(state)
        }

        (true, OverlayEvent::Activate(row)) => navigate_to(state, row),
    }
}

fn navigate_to(state: SearchUiState, row: usize) -> Transition {
    let Some(path) = state.results.get(row).map(|result| result.path.clone()) else {
        return Transition::unchanged(state);
    };
    Transition::with(
        SearchUiState::closed(),
        vec![Effect::Navigate(path), Effect::Dismiss],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{NavigationEntry, NavigationGroup};
    use assert2::check;
    use rstest::{fixture, rstest};

    #[fixture]
    fn index() -> SearchIndex {
        SearchIndex::build(&[
            NavigationGroup::new(
                "🚀 核心组件",
                vec![
                    NavigationEntry::new("Nacos 服务发现", "/nacos-discovery"),
                    NavigationEntry::new("Redis 分布式缓存", "/redis"),
                    NavigationEntry::new("Sentinel 流量控制", "/sentinel"),
                ],
            ),
            NavigationGroup::new("📦 部署", vec![NavigationEntry::new("Docker", "/docker")]),
        ])
    }

    fn open(index: &SearchIndex) -> SearchUiState {
        transition(SearchUiState::default(), OverlayEvent::Open, index).state
    }

    fn typed(index: &SearchIndex, query: &str) -> SearchUiState {
        transition(open(index), OverlayEvent::QueryChanged(query.to_string()), index).state
    }

    #[rstest]
    fn test_open_focuses_input(index: SearchIndex) {
        let t = transition(SearchUiState::default(), OverlayEvent::Open, &index);
        check!(t.state.is_open);
        check!(t.state.query.is_empty());
        check!(t.state.results.is_empty());
        check!(t.effects == [Effect::FocusInput]);
    }

    #[rstest]
    fn test_open_while_open_is_noop(index: SearchIndex) {
        let state = typed(&index, "nacos");
        let t = transition(state.clone(), OverlayEvent::Open, &index);
        check!(t.state == state);
        check!(t.effects.is_empty());
    }

    #[rstest]
    #[case(OverlayEvent::Close)]
    #[case(OverlayEvent::QueryChanged("nacos".into()))]
    #[case(OverlayEvent::SelectNext)]
    #[case(OverlayEvent::Confirm)]
    #[case(OverlayEvent::Activate(0))]
    fn test_events_ignored_while_closed(index: SearchIndex, #[case] event: OverlayEvent) {
        let t = transition(SearchUiState::default(), event, &index);
        check!(t.state == SearchUiState::default());
        check!(t.effects.is_empty());
    }

    #[rstest]
    fn test_close_resets_query_and_results(index: SearchIndex) {
        let t = transition(typed(&index, "核心"), OverlayEvent::Close, &index);
        check!(!t.state.is_open);
        check!(t.state.query.is_empty());
        check!(t.state.results.is_empty());
        check!(t.effects == [Effect::Dismiss]);
    }

    #[rstest]
    fn test_query_change_resets_cursor(index: SearchIndex) {
        let mut state = typed(&index, "核心");
        state = transition(state, OverlayEvent::SelectNext, &index).state;
        state = transition(state, OverlayEvent::SelectNext, &index).state;
        check!(state.selected_index == 2);

        state = transition(state, OverlayEvent::QueryChanged("核心组".into()), &index).state;
        check!(state.selected_index == 0);
        check!(state.results.len() == 3);
    }

    #[rstest]
    fn test_arrow_down_stops_at_last_row(index: SearchIndex) {
        let mut state = typed(&index, "核心");
        for _ in 0..10 {
            state = transition(state, OverlayEvent::SelectNext, &index).state;
        }
        check!(state.selected_index == 2);
    }

    #[rstest]
    fn test_arrow_up_stops_at_first_row(index: SearchIndex) {
        let mut state = typed(&index, "核心");
        state = transition(state, OverlayEvent::SelectNext, &index).state;
        for _ in 0..10 {
            state = transition(state, OverlayEvent::SelectPrevious, &index).state;
        }
        check!(state.selected_index == 0);
    }

    #[rstest]
    fn test_arrows_on_empty_results_are_noops(index: SearchIndex) {
        let state = typed(&index, "xyz");
        let after = transition(state.clone(), OverlayEvent::SelectNext, &index).state;
        check!(after == state);
        let after = transition(state.clone(), OverlayEvent::SelectPrevious, &index).state;
        check!(after == state);
    }

    #[rstest]
    fn test_confirm_navigates_to_selected_and_closes(index: SearchIndex) {
        let state = typed(&index, "核心");
        let state = transition(state, OverlayEvent::SelectNext, &index).state;
        let t = transition(state, OverlayEvent::Confirm, &index);
        check!(t.effects == [Effect::Navigate("/redis".into()), Effect::Dismiss]);
        check!(t.state == SearchUiState::default());
    }

    #[rstest]
    fn test_confirm_without_query_is_noop(index: SearchIndex) {
        let state = open(&index);
        let t = transition(state.clone(), OverlayEvent::Confirm, &index);
        check!(t.effects.is_empty());
        check!(t.state == state);
    }

    #[rstest]
    fn test_hover_moves_cursor_without_navigating(index: SearchIndex) {
        let t = transition(typed(&index, "核心"), OverlayEvent::Hover(2), &index);
        check!(t.state.selected_index == 2);
        check!(t.effects.is_empty());
    }

    #[rstest]
    fn test_hover_out_of_range_is_ignored(index: SearchIndex) {
        let t = transition(typed(&index, "核心"), OverlayEvent::Hover(7), &index);
        check!(t.state.selected_index == 0);
    }

    #[rstest]
    fn test_click_navigates_to_row(index: SearchIndex) {
        let t = transition(typed(&index, "核心"), OverlayEvent::Activate(2), &index);
        check!(t.effects == [Effect::Navigate("/sentinel".into()), Effect::Dismiss]);
        check!(!t.state.is_open);
    }

    #[rstest]
    fn test_views(index: SearchIndex) {
        check!(SearchUiState::default().view() == OverlayView::Hidden);
        check!(open(&index).view().guidance() == Some(EMPTY_GUIDANCE));

        let none = typed(&index, "xyz");
        check!(none.view() == OverlayView::NoResults { query: "xyz" });
        check!(none.view().guidance() == Some(NO_RESULTS_GUIDANCE));

        let some = typed(&index, "docker");
        check!(let OverlayView::Results { selected: 0, .. } = some.view());
        check!(some.selected().map(|r| r.path.as_str()) == Some("/docker"));
    }
}
