//! Property-based tests for validator invariants.

use gn_core::catalog::{catalog_position, feature, feature_keys, template_keys};
use gn_core::validate::{
    FeatureValidator, NameValidator, TemplateValidator, ValidationResult, MAX_NAME_LEN,
    MIN_NAME_LEN,
};
use proptest::prelude::*;
use proptest::sample::{select, subsequence};

fn feature_subset() -> impl Strategy<Value = Vec<&'static str>> {
    let keys: Vec<&'static str> = feature_keys().collect();
    let len = keys.len();
    subsequence(keys, 0..=len)
}

fn result_strategy() -> impl Strategy<Value = ValidationResult> {
    (
        prop::collection::vec("[a-z ]{1,20}", 0..3),
        prop::collection::vec("[a-z ]{1,20}", 0..3),
        prop::collection::vec("[a-z ]{1,20}", 0..3),
    )
        .prop_map(|(e, w, s)| ValidationResult::failure(e, w, s))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2_000))]

    #[test]
    fn well_formed_names_are_valid(name in "[A-Za-z][A-Za-z0-9]{1,20}(-[A-Za-z0-9]{1,10}){0,2}") {
        prop_assume!(!NameValidator::is_reserved(&name));
        let result = NameValidator::validate(&name);
        prop_assert!(result.is_valid(), "{name}: {:?}", result.errors());
    }

    #[test]
    fn names_outside_length_bounds_are_invalid(
        name in prop_oneof!["[a-z]{0,1}", "[a-z]{51,80}"]
    ) {
        let len = name.chars().count();
        prop_assert!(!(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len));
        prop_assert!(!NameValidator::validate(&name).is_valid());
    }

    #[test]
    fn names_not_starting_with_a_letter_are_invalid(name in "[0-9_-][a-z0-9_-]{1,20}") {
        let result = NameValidator::validate(&name);
        prop_assert!(!result.is_valid());
    }

    #[test]
    fn reserved_names_rejected_in_any_case(
        name in select(vec!["con", "aux", "test", "build", "class", "lambda"]),
        upper in any::<bool>()
    ) {
        let candidate = if upper { name.to_uppercase() } else { name.to_string() };
        let result = NameValidator::validate(&candidate);
        prop_assert!(!result.is_valid());
        prop_assert!(result.errors().iter().any(|e| e.contains("reserved")));
    }

    #[test]
    fn validity_tracks_errors(result in result_strategy()) {
        prop_assert_eq!(result.is_valid(), result.errors().is_empty());
    }

    #[test]
    fn merge_concatenates_and_ands_validity(a in result_strategy(), b in result_strategy()) {
        let mut merged = a.clone();
        merged.merge(b.clone());
        prop_assert_eq!(merged.errors().len(), a.errors().len() + b.errors().len());
        prop_assert_eq!(merged.warnings().len(), a.warnings().len() + b.warnings().len());
        prop_assert_eq!(merged.is_valid(), a.is_valid() && b.is_valid());
    }

    #[test]
    fn catalog_templates_are_valid(key in select(template_keys().collect::<Vec<_>>())) {
        prop_assert!(TemplateValidator::validate(key).is_valid());
    }

    #[test]
    fn unknown_templates_list_every_key(key in "[a-z]{3,12}-x") {
        let result = TemplateValidator::validate(&key);
        prop_assert!(!result.is_valid());
        for known in template_keys() {
            prop_assert!(result.errors()[0].contains(known));
        }
    }

    #[test]
    fn closure_is_superset_and_idempotent(features in feature_subset()) {
        let closure = FeatureValidator::resolve_dependencies(features.as_slice());
        for f in &features {
            prop_assert!(closure.contains(*f));
        }
        let again: Vec<&str> = closure.iter().map(String::as_str).collect();
        prop_assert_eq!(FeatureValidator::resolve_dependencies(again.as_slice()), closure);
    }

    #[test]
    fn closure_contains_every_dependency(features in feature_subset()) {
        let closure = FeatureValidator::resolve_dependencies(features.as_slice());
        for key in &closure {
            let info = feature(key).expect("catalog feature");
            for dep in info.dependencies {
                prop_assert!(closure.contains(*dep));
            }
        }
    }

    #[test]
    fn catalog_features_always_valid(features in feature_subset()) {
        let result = FeatureValidator::validate(features.as_slice());
        prop_assert!(result.is_valid());
        let added = FeatureValidator::added_dependencies(features.as_slice());
        prop_assert_eq!(added.is_empty(), result.warnings().is_empty());
    }

    #[test]
    fn duplicates_do_not_change_outcome(features in feature_subset()) {
        let doubled: Vec<&str> = features.iter().chain(features.iter()).copied().collect();
        prop_assert_eq!(
            FeatureValidator::resolve_dependencies(doubled.as_slice()),
            FeatureValidator::resolve_dependencies(features.as_slice())
        );
        prop_assert!(FeatureValidator::validate(doubled.as_slice()).is_valid());
    }

    #[test]
    fn resolved_order_follows_catalog(features in feature_subset()) {
        let ordered = FeatureValidator::resolve_in_catalog_order(features.as_slice());
        let positions: Vec<usize> = ordered
            .iter()
            .map(|f| catalog_position(f).expect("catalog feature"))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn any_unknown_feature_fails(
        features in feature_subset(),
        unknown in "zz[a-z]{2,8}"
    ) {
        let mut requested = features.clone();
        requested.push(unknown.as_str());
        let result = FeatureValidator::validate(requested.as_slice());
        prop_assert!(!result.is_valid());
        prop_assert!(result.errors()[0].contains(&unknown));
    }
}
