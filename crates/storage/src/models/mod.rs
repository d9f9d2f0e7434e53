pub mod athlete;
pub mod coach;
pub mod competition;
pub mod lookup;
pub mod report;
pub mod result;

pub use athlete::{Athlete, AthleteSummary};
pub use coach::Coach;
pub use competition::{Competition, CompetitionSummary};
pub use lookup::LookupItem;
pub use report::{CompetitionAward, FemaleAthlete};
pub use result::{CompetitionResult, ResultSummary};
