//! Bundled scenario corpus
//!
//! Every entry in `data/scenarios.json` must reproduce exactly.

use blend_tests::corpus::bundled_scenarios;

#[test_log::test]
fn bundled_scenarios_reproduce() {
    let scenarios = bundled_scenarios().expect("failed to load scenarios");

    let mut failures = Vec::new();
    for scenario in &scenarios {
        let got = scenario.op.run();
        if got != scenario.expected {
            failures.push(format!(
                "{}: expected {:?}, got {:?}",
                scenario.name, scenario.expected, got
            ));
        }
    }

    log::info!("{} scenarios, {} failures", scenarios.len(), failures.len());
    assert!(failures.is_empty(), "\n{}", failures.join("\n"));
}

#[test]
fn scenario_names_are_unique() {
    let scenarios = bundled_scenarios().expect("failed to load scenarios");
    let mut names: Vec<&str> = scenarios.iter().map(|s| s.name.as_str()).collect();
    names.sort_unstable();
    let before = names.len();
    names.dedup();
    assert_eq!(before, names.len());
}
