pub mod session;
pub mod utterance;

pub use session::*;
pub use utterance::*;
