use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for the awards-by-competition report. The defaults
/// match the fixed arguments the original reports page passed.
#[derive(Debug, Deserialize, IntoParams)]
pub struct AwardsReportParams {
    #[serde(default = "default_competition")]
    pub competition: i32,
    #[serde(default = "default_sport")]
    pub sport: i32,
}

fn default_competition() -> i32 {
    1
}

fn default_sport() -> i32 {
    6
}

/// Query parameters for the female-athletes report.
#[derive(Debug, Deserialize, IntoParams)]
pub struct FemaleAthletesParams {
    #[serde(default = "default_year")]
    pub year: i32,
}

fn default_year() -> i32 {
    2025
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_awards_params_default_to_original_literals() {
        let params: AwardsReportParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.competition, 1);
        assert_eq!(params.sport, 6);
    }

    #[test]
    fn test_year_defaults() {
        let params: FemaleAthletesParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.year, 2025);
    }
}
