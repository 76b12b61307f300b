use super::fixture_loader::{FixtureCase, FixtureFailure, FixtureResult, load_query_cases};
/// Fixture runner
///
/// Runs the data-driven query cases against `ModifiableUrl`
use tmplurl::ModifiableUrl;

pub fn run_fixture_cases(cases: Vec<FixtureCase>) -> FixtureResult {
    let mut result = FixtureResult::default();
    let mut case_num = 0;

    for case in cases {
        let FixtureCase::QueryCase {
            input,
            failure,
            add,
            replace,
            base_path,
            params,
            href,
            contains,
            excludes,
        } = case
        else {
            continue;
        };
        case_num += 1;

        let mut failures = Vec::new();
        let mut fail = |field: &str, expected: String, actual: String| {
            failures.push(FixtureFailure {
                case_num,
                input: input.clone(),
                field: field.to_string(),
                expected,
                actual,
            });
        };

        if failure == Some(true) {
            if ModifiableUrl::parse(&input).is_ok() {
                fail("parsing", "failure".to_string(), "success".to_string());
            }
            if ModifiableUrl::try_parse(&input).is_some() {
                fail("try_parse", "None".to_string(), "Some".to_string());
            }
        } else {
            match ModifiableUrl::parse(&input) {
                Ok(Some(mut url)) => {
                    for (key, value) in &add {
                        url.add_param(key, value);
                    }
                    for (token, replacement) in &replace {
                        url.replace_first_matching_value(token, replacement);
                    }

                    if let Some(expected) = &base_path {
                        if url.base_path() != expected.as_str() {
                            fail("base_path", expected.clone(), url.base_path().to_string());
                        }
                    }
                    if let Some(expected) = &params {
                        let actual = url.params();
                        if &actual != expected {
                            fail("params", format!("{expected:?}"), format!("{actual:?}"));
                        }
                    }

                    let serialized = url.serialize().to_string();
                    if let Some(expected) = &href {
                        if &serialized != expected {
                            fail("href", expected.clone(), serialized.clone());
                        }
                    }
                    for needle in &contains {
                        if !serialized.contains(needle.as_str()) {
                            fail("contains", needle.clone(), serialized.clone());
                        }
                    }
                    for needle in &excludes {
                        if serialized.contains(needle.as_str()) {
                            fail("excludes", needle.clone(), serialized.clone());
                        }
                    }
                    if url.serialize() != serialized {
                        fail("idempotence", serialized.clone(), url.serialize().to_string());
                    }
                }
                Ok(None) => fail("parsing", "Some".to_string(), "None".to_string()),
                Err(err) => fail("parsing", "success".to_string(), err.to_string()),
            }
        }

        if failures.is_empty() {
            result.passed += 1;
        } else {
            result.failed += 1;
            result.failures.extend(failures);
        }
    }

    result
}

#[test]
fn test_query_cases() {
    let result = run_fixture_cases(load_query_cases());
    for failure in &result.failures {
        eprintln!(
            "case #{} {:?}: {} expected {:?}, got {:?}",
            failure.case_num, failure.input, failure.field, failure.expected, failure.actual
        );
    }
    assert_eq!(result.failed, 0, "{}", result.summary());
    assert!(result.passed >= 20);
}
