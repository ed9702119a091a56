mod card;
mod spinner;
mod style;

pub use card::{format_advice, format_daily, print_advice, print_daily};
pub use spinner::Spinner;
pub use style::Style;
