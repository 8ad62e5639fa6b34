pub mod badge_engine;
pub mod progress;

pub use badge_engine::evaluate_badges;
pub use progress::ProgressStats;
