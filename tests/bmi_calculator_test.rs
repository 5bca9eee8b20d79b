// ABOUTME: Algorithm tests for BMI derivation, classification and healthy weight range
// ABOUTME: Covers category boundaries, age-specific tables, advisory qualifiers and invalid input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! BMI derivation tests
//!
//! - Formula and one-decimal rounding
//! - Adult and minor category tables, including band edges
//! - Advisory qualifiers for age bracket and biological sex
//! - Healthy weight range and distance to it
//! - Rejection of non-positive and non-finite measurements

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::{
    bmi_calculator::{
        build_advisory, calculate_bmi, classify_bmi, derive_bmi, healthy_weight_range,
        round_to_one_decimal, weight_change_to_healthy_range, BmiCategory,
    },
    config::intelligence::{BmiBand, BmiCategoryTable, BmiConfig},
    constants::units::CM_PER_METER,
    errors::ErrorCode,
    models::{BiologicalSex, BiometricProfile},
};

mod common;

use common::approx_eq;

// ============================================================================
// FORMULA
// ============================================================================

#[test]
fn test_calculate_bmi_typical_adult() {
    let bmi = calculate_bmi(70.0, 175.0).unwrap();
    assert!(approx_eq(bmi, 22.9));
}

#[test]
fn test_calculate_bmi_rounds_to_one_decimal() {
    // 45 / 1.75^2 = 14.693...
    assert!(approx_eq(calculate_bmi(45.0, 175.0).unwrap(), 14.7));
    // 85 / 1.75^2 = 27.755...
    assert!(approx_eq(calculate_bmi(85.0, 175.0).unwrap(), 27.8));
}

#[test]
fn test_round_to_one_decimal() {
    assert!(approx_eq(round_to_one_decimal(22.857_142), 22.9));
    assert!(approx_eq(round_to_one_decimal(22.849_9), 22.8));
    assert!(approx_eq(round_to_one_decimal(18.5), 18.5));
}

#[test]
fn test_calculate_bmi_rejects_non_positive_weight() {
    let err = calculate_bmi(0.0, 175.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.context.field.as_deref(), Some("weightKg"));

    let err = calculate_bmi(-70.0, 175.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_calculate_bmi_rejects_non_positive_height() {
    let err = calculate_bmi(70.0, 0.0).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(err.context.field.as_deref(), Some("heightCm"));

    assert!(calculate_bmi(70.0, -175.0).is_err());
}

#[test]
fn test_calculate_bmi_rejects_non_finite_input() {
    assert!(calculate_bmi(f64::NAN, 175.0).is_err());
    assert!(calculate_bmi(70.0, f64::INFINITY).is_err());
    assert!(calculate_bmi(f64::INFINITY, 175.0).is_err());
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

#[test]
fn test_adult_categories_across_the_table() {
    let config = BmiConfig::default();
    let cases = [
        (45.0, BmiCategory::Underweight),
        (70.0, BmiCategory::Normal),
        (85.0, BmiCategory::Overweight),
        (100.0, BmiCategory::ObesityClassI),
        (120.0, BmiCategory::ObesityClassII),
        (130.0, BmiCategory::ObesityClassIII),
    ];

    for (weight, expected) in cases {
        let result = derive_bmi(&BiometricProfile::new(weight, 175.0), &config).unwrap();
        assert_eq!(result.category, expected, "weight {weight}");
        assert_eq!(result.category_index, expected.index());
    }
}

#[test]
fn test_band_upper_bounds_are_exclusive() {
    let table = BmiCategoryTable::adult();
    assert_eq!(classify_bmi(18.4, &table).unwrap(), BmiCategory::Underweight);
    assert_eq!(classify_bmi(18.5, &table).unwrap(), BmiCategory::Normal);
    assert_eq!(classify_bmi(24.9, &table).unwrap(), BmiCategory::Normal);
    assert_eq!(classify_bmi(25.0, &table).unwrap(), BmiCategory::Overweight);
    assert_eq!(classify_bmi(30.0, &table).unwrap(), BmiCategory::ObesityClassI);
    assert_eq!(classify_bmi(35.0, &table).unwrap(), BmiCategory::ObesityClassII);
    assert_eq!(classify_bmi(40.0, &table).unwrap(), BmiCategory::ObesityClassIII);
    assert_eq!(classify_bmi(75.0, &table).unwrap(), BmiCategory::ObesityClassIII);
}

#[test]
fn test_category_follows_rounded_value() {
    // 24.96 rounds to 25.0, which is overweight
    let result = derive_bmi(&BiometricProfile::new(24.96, 100.0), &BmiConfig::default()).unwrap();
    assert!(approx_eq(result.value, 25.0));
    assert_eq!(result.category, BmiCategory::Overweight);
}

#[test]
fn test_category_never_decreases_as_weight_increases() {
    let config = BmiConfig::default();
    let mut previous = 0;
    for weight in 40..=160 {
        let result =
            derive_bmi(&BiometricProfile::new(f64::from(weight), 175.0), &config).unwrap();
        assert!(
            result.category_index >= previous,
            "category dropped at {weight} kg"
        );
        previous = result.category_index;
    }
    assert_eq!(previous, BmiCategory::ObesityClassIII.index());
}

#[test]
fn test_minor_table_collapses_obesity_classes() {
    let config = BmiConfig::default();
    let profile = BiometricProfile::new(130.0, 175.0).with_age(15);
    let result = derive_bmi(&profile, &config).unwrap();

    assert!(approx_eq(result.value, 42.4));
    assert_eq!(result.category, BmiCategory::ObesityClassI);
}

#[test]
fn test_adult_age_uses_adult_table() {
    let config = BmiConfig::default();
    let profile = BiometricProfile::new(130.0, 175.0).with_age(18);
    let result = derive_bmi(&profile, &config).unwrap();
    assert_eq!(result.category, BmiCategory::ObesityClassIII);
}

#[test]
fn test_unknown_age_uses_adult_table() {
    let config = BmiConfig::default();
    assert_eq!(config.table_for_age(None), &config.adult_table);
    assert_eq!(config.table_for_age(Some(17)), &config.minor_table);
    assert_eq!(config.table_for_age(Some(40)), &config.adult_table);
}

#[test]
fn test_classify_reports_uncovered_value() {
    let table = BmiCategoryTable {
        bands: vec![BmiBand::below(18.5, BmiCategory::Underweight)],
    };
    let err = classify_bmi(30.0, &table).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_custom_table_changes_category() {
    let mut config = BmiConfig::default();
    config.adult_table = BmiCategoryTable {
        bands: vec![
            BmiBand::below(18.5, BmiCategory::Underweight),
            BmiBand::below(23.0, BmiCategory::Normal),
            BmiBand::below(27.5, BmiCategory::Overweight),
            BmiBand::open(BmiCategory::ObesityClassI),
        ],
    };
    config.validate().unwrap();

    let result = derive_bmi(&BiometricProfile::new(70.0, 175.0), &config).unwrap();
    assert_eq!(result.category, BmiCategory::Normal);
    let result = derive_bmi(&BiometricProfile::new(72.0, 175.0), &config).unwrap();
    assert_eq!(result.category, BmiCategory::Overweight);
}

// ============================================================================
// ADVISORY TEXT
// ============================================================================

#[test]
fn test_advisory_without_optional_fields_is_category_template() {
    let config = BmiConfig::default();
    let result = derive_bmi(&BiometricProfile::new(70.0, 175.0), &config).unwrap();
    assert_eq!(result.advisory_text, BmiCategory::Normal.advisory());
}

#[test]
fn test_advisory_adds_minor_qualifier() {
    let config = BmiConfig::default();
    let profile = BiometricProfile::new(60.0, 170.0).with_age(14);
    let text = build_advisory(BmiCategory::Normal, &profile, &config);

    assert!(text.starts_with(BmiCategory::Normal.advisory()));
    assert!(text.contains("under 18"));
    assert!(text.contains("growth percentiles"));
}

#[test]
fn test_advisory_adds_older_adult_qualifier() {
    let config = BmiConfig::default();
    let profile = BiometricProfile::new(80.0, 170.0).with_age(70);
    let text = build_advisory(BmiCategory::Overweight, &profile, &config);
    assert!(text.contains("From age 65"));
}

#[test]
fn test_advisory_has_no_age_qualifier_for_working_age_adults() {
    let config = BmiConfig::default();
    let profile = BiometricProfile::new(70.0, 175.0).with_age(40);
    let text = build_advisory(BmiCategory::Normal, &profile, &config);
    assert_eq!(text, BmiCategory::Normal.advisory());
}

#[test]
fn test_advisory_adds_sex_sentence() {
    let config = BmiConfig::default();
    let male = BiometricProfile::new(90.0, 180.0).with_sex(BiologicalSex::Male);
    let female = BiometricProfile::new(70.0, 165.0).with_sex(BiologicalSex::Female);

    let male_text = build_advisory(BmiCategory::Overweight, &male, &config);
    let female_text = build_advisory(BmiCategory::Overweight, &female, &config);

    assert!(male_text.contains("lean mass"));
    assert!(female_text.contains("body fat"));
    assert_ne!(male_text, female_text);
}

#[test]
fn test_advisory_combines_age_and_sex() {
    let config = BmiConfig::default();
    let profile = BiometricProfile::new(80.0, 170.0)
        .with_age(72)
        .with_sex(BiologicalSex::Female);
    let text = build_advisory(BmiCategory::Overweight, &profile, &config);

    let age_pos = text.find("From age 65").unwrap();
    let sex_pos = text.find("Women usually").unwrap();
    assert!(age_pos < sex_pos);
}

// ============================================================================
// HEALTHY RANGE
// ============================================================================

#[test]
fn test_healthy_weight_range_for_height() {
    let (low, high) = healthy_weight_range(175.0, &BmiConfig::default()).unwrap();
    assert!(approx_eq(low, 56.7));
    assert!(approx_eq(high, 76.3));
}

#[test]
fn test_healthy_weight_range_uses_configured_bounds() {
    let config = BmiConfig {
        healthy_bmi_low: 20.0,
        healthy_bmi_high: 25.0,
        ..BmiConfig::default()
    };
    let (low, high) = healthy_weight_range(200.0, &config).unwrap();
    assert!(approx_eq(low, 80.0));
    assert!(approx_eq(high, 100.0));
}

#[test]
fn test_one_meter_height_maps_bmi_to_weight() {
    let height_cm = CM_PER_METER;
    let config = BmiConfig::default();

    assert!(approx_eq(calculate_bmi(64.0, height_cm).unwrap(), 64.0));
    let (low, high) = healthy_weight_range(height_cm, &config).unwrap();
    assert!(approx_eq(low, config.healthy_bmi_low));
    assert!(approx_eq(high, config.healthy_bmi_high));

    let err = healthy_weight_range(0.0, &config).unwrap_err();
    assert_eq!(err.context.field.as_deref(), Some("heightCm"));
}

#[test]
fn test_derive_bmi_reports_range() {
    let result = derive_bmi(&BiometricProfile::new(70.0, 175.0), &BmiConfig::default()).unwrap();
    assert!(approx_eq(result.range_low, 56.7));
    assert!(approx_eq(result.range_high, 76.3));
    assert!(result.range_low < result.range_high);
}

#[test]
fn test_weight_change_to_healthy_range() {
    let config = BmiConfig::default();

    let under = derive_bmi(&BiometricProfile::new(45.0, 175.0), &config).unwrap();
    assert!(approx_eq(weight_change_to_healthy_range(&under, 45.0), 11.7));

    let over = derive_bmi(&BiometricProfile::new(100.0, 175.0), &config).unwrap();
    assert!(approx_eq(weight_change_to_healthy_range(&over, 100.0), -23.7));

    let healthy = derive_bmi(&BiometricProfile::new(70.0, 175.0), &config).unwrap();
    assert!(approx_eq(weight_change_to_healthy_range(&healthy, 70.0), 0.0));
}

#[test]
fn test_derive_bmi_rejects_invalid_profile() {
    let config = BmiConfig::default();
    let err = derive_bmi(&BiometricProfile::new(70.0, 0.0), &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_derived_result_serializes_camel_case() {
    let result = derive_bmi(&BiometricProfile::new(70.0, 175.0), &BmiConfig::default()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["category"], "normal");
    assert_eq!(json["categoryIndex"], 1);
    assert!(json["advisoryText"].is_string());
    assert!(json.get("rangeLow").is_some());
    assert!(json.get("rangeHigh").is_some());
}

#[test]
fn test_category_labels_match_serialization() {
    for category in [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::ObesityClassI,
        BmiCategory::ObesityClassII,
        BmiCategory::ObesityClassIII,
    ] {
        let json = serde_json::to_value(category).unwrap();
        assert_eq!(json, category.label());
        assert_eq!(category.to_string(), category.label());
    }
}
