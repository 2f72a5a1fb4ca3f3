pub mod interjections;

pub use interjections::*;
