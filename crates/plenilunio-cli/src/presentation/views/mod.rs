mod html;
mod text;

pub use html::SeasonNavView;
pub use text::{ControlsBarView, ErrorTextView, PlaceholderTextView, SeasonListView, SeasonTextView};
