//! Application state (Model in TEA pattern)

use floatchat_core::sample_data::{self, EXAMPLE_QUERIES, SUGGESTION_COUNT};
use floatchat_core::{AnalyticsCard, DepthProfile, FloatRecord, ViewMode};
use tracing::debug;

use crate::chat_scroll::ChatScrollState;
use crate::config::Settings;
use crate::reply::PendingReplies;
use crate::store::MessageStore;

/// Complete application state.
///
/// Only `handler::update` mutates this, apart from the transcript size the
/// renderer writes back into `chat_scroll`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active main view
    pub view: ViewMode,

    /// Sidebar expanded (labels) or collapsed (icons only)
    pub sidebar_open: bool,

    /// Dark palette selected
    pub dark_mode: bool,

    /// Chat transcript
    pub store: MessageStore,

    /// Text currently typed into the chat input
    pub input: String,

    /// Replies waiting on their delay
    pub pending: PendingReplies,

    /// Static float records shown on the map
    pub floats: Vec<FloatRecord>,

    /// Index into `floats` of the float whose popup is shown
    pub selected_float: usize,

    /// Temperature cast plotted on the analytics view
    pub profile: DepthProfile,

    /// Analytics dashboard panels
    pub cards: Vec<AnalyticsCard>,

    /// Transcript scroll position
    pub chat_scroll: ChatScrollState,

    /// Index of the example query last copied into the input
    pub suggestion_cursor: Option<usize>,

    /// Blank prompts rejected so far
    pub rejected_inputs: u64,

    /// No further prompts will be submitted
    pub input_closed: bool,

    /// Animation frame counter, advanced on every tick
    pub tick_count: u64,

    /// Loaded configuration
    pub settings: Settings,

    quit_requested: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            view: ViewMode::default(),
            sidebar_open: settings.ui.sidebar_open,
            dark_mode: settings.ui.dark_mode,
            store: MessageStore::with_greeting(sample_data::GREETING),
            input: String::new(),
            pending: PendingReplies::new(),
            floats: sample_data::sample_floats(),
            selected_float: 0,
            profile: sample_data::temperature_profile(),
            cards: sample_data::analytics_cards(),
            chat_scroll: ChatScrollState::new(),
            suggestion_cursor: None,
            rejected_inputs: 0,
            input_closed: false,
            tick_count: 0,
            settings,
            quit_requested: false,
        }
    }

    /// A reply is being "typed"
    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    pub fn request_quit(&mut self) {
        debug!("Quit requested");
        self.quit_requested = true;
    }

    /// Switch views. Last writer wins; there is no history.
    ///
    /// Returns true if the view actually changed.
    pub fn set_view(&mut self, view: ViewMode) -> bool {
        if self.view == view {
            return false;
        }
        debug!("View {:?} -> {:?}", self.view, view);
        self.view = view;
        true
    }

    pub fn selected_float(&self) -> Option<&FloatRecord> {
        self.floats.get(self.selected_float)
    }

    /// Example queries offered while the transcript only holds the greeting
    pub fn suggestions(&self) -> &'static [&'static str] {
        if self.store.only_greeting() {
            &EXAMPLE_QUERIES[..SUGGESTION_COUNT]
        } else {
            &[]
        }
    }
}
