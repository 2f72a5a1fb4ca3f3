pub mod pipeline;
pub mod stage0_parse;
pub mod stage1_merge;
pub mod stage2_punctuate;
pub mod stage3_render;

pub use pipeline::*;
pub use stage0_parse::*;
pub use stage1_merge::*;
pub use stage2_punctuate::*;
pub use stage3_render::*;
