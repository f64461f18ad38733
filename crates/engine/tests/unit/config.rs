//! Configuration defaults and validation.

use pretty_assertions::assert_eq;
use rstest::rstest;

use faultsim_core::{SimConfig, SimError};

#[test]
fn defaults_match_baseline_run() {
    let config = SimConfig::default();
    assert_eq!(config.trials, 1000);
    assert_eq!(config.sequence_length, 1000);
    assert_eq!(config.max_page_id, 250);
    assert_eq!(config.max_capacity, 100);
    assert!(config.workers >= 1);
}

#[test]
fn default_config_validates() {
    assert_eq!(SimConfig::default().validate(), Ok(()));
}

#[rstest]
#[case::trials("trials")]
#[case::sequence_length("sequence_length")]
#[case::max_page_id("max_page_id")]
#[case::max_capacity("max_capacity")]
#[case::workers("workers")]
fn zero_parameter_is_rejected(#[case] field: &'static str) {
    let mut config = SimConfig::default();
    match field {
        "trials" => config.trials = 0,
        "sequence_length" => config.sequence_length = 0,
        "max_page_id" => config.max_page_id = 0,
        "max_capacity" => config.max_capacity = 0,
        "workers" => config.workers = 0,
        other => unreachable!("unknown field {other}"),
    }
    assert_eq!(config.validate(), Err(SimError::Config { field, value: 0 }));
}

#[test]
fn unit_count_is_three_per_trial_capacity_pair() {
    let config = SimConfig {
        trials: 4,
        max_capacity: 10,
        ..SimConfig::default()
    };
    assert_eq!(config.unit_count(), 4 * 3 * 10);
}

#[test]
fn config_deserializes_from_json_with_partial_fields() {
    let config: SimConfig = serde_json::from_str(r#"{"trials": 7, "max_capacity": 9}"#)
        .expect("valid partial config");
    assert_eq!(config.trials, 7);
    assert_eq!(config.max_capacity, 9);
    assert_eq!(config.sequence_length, 1000);
    assert_eq!(config.max_page_id, 250);
}

#[test]
fn config_rejects_unknown_fields() {
    let result: Result<SimConfig, _> = serde_json::from_str(r#"{"trails": 7}"#);
    assert!(result.is_err());
}

#[test]
fn config_error_names_the_field() {
    let config = SimConfig {
        max_capacity: 0,
        ..SimConfig::default()
    };
    let err = config.validate().expect_err("zero capacity must be rejected");
    assert_eq!(
        err.to_string(),
        "configuration: `max_capacity` must be positive (got 0)"
    );
}
