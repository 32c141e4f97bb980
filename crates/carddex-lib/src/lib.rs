pub mod card;
pub mod filter;
pub mod toggle;

pub use card::{CardDetail, CardSummary, Series};
pub use filter::{paginate, series_options, CardFilter, Page, PER_PAGE};
pub use toggle::{favorited, toggle_url, ToggleResponse, TOGGLE_ENDPOINT};
