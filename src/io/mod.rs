pub mod input;
pub mod layout;
pub mod output;

pub use input::*;
pub use layout::*;
pub use output::*;
