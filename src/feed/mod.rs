pub mod aggregator;
pub mod categories;
pub mod pagination;

pub use aggregator::{build_home_feed, CategorySection, FeedRequest};
pub use categories::ResolvedCategories;
pub use pagination::{FeedSection, LoadOutcome, LoadState, SectionFilter, SectionSnapshot};
