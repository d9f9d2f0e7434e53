pub mod athletes;
pub mod coaches;
pub mod competitions;
pub mod lookups;
pub mod reports;
pub mod results;
pub mod stats;
