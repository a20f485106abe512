mod catalog;
mod ids;
mod track;

pub use catalog::Catalog;
pub use ids::TrackId;
pub use track::Track;

/// Set of favorite track ids
///
/// Ordered so the persisted JSON array is stable (`[1,3,7]`).
pub type FavoriteSet = std::collections::BTreeSet<TrackId>;
