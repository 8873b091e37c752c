pub mod context;
pub mod handicap;
pub mod match_play;
pub mod score_aggregators;
pub mod sort_utils;

pub use context::*;
pub use handicap::*;
pub use match_play::*;
pub use score_aggregators::*;
pub use sort_utils::*;
