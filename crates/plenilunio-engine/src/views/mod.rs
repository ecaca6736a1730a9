// Views turn view models into markup. Layout and escaping live here;
// data selection stays in the presenter.

pub mod html;

pub use html::{ErrorView, PlaceholderView, PracticeView, SeasonContentView, SeasonView};
