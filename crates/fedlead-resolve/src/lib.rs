pub mod contractors;
pub mod normalize;
pub mod resolver;

pub use contractors::{MatchCriteria, normalize_contractor_name, suggest_contractors};
pub use normalize::Normalizer;
pub use resolver::{pain_points_for_command, resolve_enrichment};
