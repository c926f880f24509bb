pub mod stats_query;

pub use stats_query::{DiseaseBucket, StatsQuery, StatsQueryError};
