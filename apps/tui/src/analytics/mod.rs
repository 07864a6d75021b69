// Derived values behind each dashboard section.
// Everything here is a pure function of the loaded tables.

pub mod advanced;
pub mod detail;
pub mod overview;
pub mod segmentation;

pub use advanced::{digital_profile, ScaledMatrix};
pub use detail::{fan_profile, rank_fan_ids, unique_fan_ids, FanProfile};
pub use overview::{score_histogram, tier_breakdown, Histogram, OverviewStats, TierShare};
pub use segmentation::{cluster_scores, tier_distribution, ClusterScore, TierDistribution};
