//! Time spans and their textual forms.

mod duration;
mod parser;

pub use duration::Duration;
pub use parser::parse_time;
