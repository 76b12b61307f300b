/// Fixture loader for the data-driven query cases
///
/// Each entry in `query_cases.json` is either a comment string or a case
/// describing an input URL, optional mutations and the expected outcome.
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum FixtureCase {
    QueryCase {
        input: String,
        #[serde(default)]
        failure: Option<bool>,
        /// Applied first, in order, through `add_param`
        #[serde(default)]
        add: Vec<(String, String)>,
        /// Applied after `add`, in order, through `replace_first_matching_value`
        #[serde(default)]
        replace: Vec<(String, String)>,
        #[serde(default)]
        base_path: Option<String>,
        #[serde(default)]
        params: Option<BTreeMap<String, String>>,
        /// Exact serialized output (only used where order cannot matter)
        #[serde(default)]
        href: Option<String>,
        #[serde(default)]
        contains: Vec<String>,
        #[serde(default)]
        excludes: Vec<String>,
    },
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub case_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

pub fn load_query_cases() -> Vec<FixtureCase> {
    serde_json::from_str(include_str!("query_cases.json")).expect("query_cases.json is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_query_cases() {
        let cases = load_query_cases();
        let queries = cases
            .iter()
            .filter(|case| matches!(case, FixtureCase::QueryCase { .. }))
            .count();
        assert!(queries >= 20);
        assert!(
            cases
                .iter()
                .any(|case| matches!(case, FixtureCase::Comment(_)))
        );
    }
}
