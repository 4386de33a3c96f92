pub mod builder;
pub mod engine;
pub mod filtering;
pub mod predicate;
pub mod prelude;
pub mod sorting;
pub mod types;

pub use builder::FilterCriteriaBuilder;
pub use engine::{PageRequest, PageWindow, QueryEngine, execute};
pub use filtering::{CriteriaNormalizer, PriceInput, RawCriteria};
pub use predicate::{ListingPredicate, PredicateBuilder};
pub use sorting::*;
pub use types::*;
