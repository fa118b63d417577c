//! Custom widgets for the Floatchat TUI

mod analytics_view;
mod chat_view;
mod header;
mod input_box;
mod map_view;
mod sidebar;

pub use analytics_view::{AnalyticsView, ProfileChart};
pub use chat_view::ChatView;
pub use header::MainHeader;
pub use input_box::InputBox;
pub use map_view::MapView;
pub use sidebar::Sidebar;
