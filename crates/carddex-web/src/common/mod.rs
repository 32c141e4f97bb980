mod card_item;
pub use card_item::CardItem;

mod route;
pub use route::Route;

mod spinner;
pub use spinner::Spinner;

pub mod snackbar;
