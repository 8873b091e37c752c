pub mod hole;
pub mod ids;
pub mod leaderboard;
pub mod types;

pub use hole::*;
pub use ids::*;
pub use leaderboard::*;
pub use types::*;
