pub mod athlete;
pub mod coach;
pub mod common;
pub mod competition;
pub mod report;
pub mod result;
