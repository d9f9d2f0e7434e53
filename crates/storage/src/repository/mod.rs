pub mod athlete;
pub mod coach;
pub mod competition;
pub mod lookup;
pub mod report;
pub mod resource;
pub mod result;
pub mod stats;
