// ============================================================================
// Dose Scenario Tests
// Literal fixtures for known medicines and weights
// ============================================================================

use chrono::{TimeZone, Utc};
use dose_calculator::prelude::*;
use rust_decimal::Decimal;

fn kg(value: &str) -> Decimal {
    value.parse().unwrap()
}

fn amoxicillin() -> Medicine {
    Medicine::new("Amoxicillin")
        .with_min_dose("20mg/kg")
        .with_concentration("50mg/mL")
}

#[test]
fn amoxicillin_single_rate() {
    let medicine = amoxicillin();
    let calc = DoseCalculator::new(&medicine);

    assert_eq!(calc.calculate(kg("0.834"), false, 2).unwrap().min(), "0.33");
    assert_eq!(calc.calculate(kg("0.834"), true, 2).unwrap().min(), "0.33");
    assert_eq!(calc.calculate_range(kg("0.834"), 2).unwrap().to_string(), "0.33 mL");
    assert_eq!(calc.calculate(kg("0.834"), false, 3).unwrap().min(), "0.334");
    assert_eq!(calc.calculate(kg("0.834"), false, 4).unwrap().min(), "0.3336");
}

#[test]
fn amoxicillin_range_rounds_up() {
    let medicine = amoxicillin().with_max_dose("40mg/kg");
    let calc = DoseCalculator::new(&medicine);

    assert_eq!(calc.calculate(kg("0.834"), false, 2).unwrap().min(), "0.33");
    assert_eq!(calc.calculate(kg("0.834"), true, 2).unwrap().min(), "0.67");

    let range = calc.calculate_range(kg("0.834"), 2).unwrap();
    assert_eq!(range.min(), "0.33");
    assert_eq!(range.max(), Some("0.67"));
    assert_eq!(range.to_string(), "0.33 - 0.67 mL");

    assert_eq!(
        calc.calculate_range(kg("0.834"), 3).unwrap().to_string(),
        "0.334 - 0.667 mL"
    );
    assert_eq!(
        calc.calculate_range(kg("0.834"), 4).unwrap().to_string(),
        "0.3336 - 0.6672 mL"
    );
}

#[test]
fn azithromycin_keeps_trailing_zero() {
    let medicine = Medicine::new("Azithromycin")
        .with_min_dose("5mg/kg")
        .with_concentration("100 mg/ 5mL");
    let calc = DoseCalculator::new(&medicine);

    assert_eq!(calc.calculate(kg("1.2"), false, 2).unwrap().min(), "0.30");
    assert_eq!(calc.calculate(kg("1.2"), false, 1).unwrap().min(), "0.3");
}

#[test]
fn famotidine_rounds_half_up_at_one_digit() {
    let medicine = Medicine::new("Famotidine")
        .with_min_dose("0.5mg/kg")
        .with_concentration("4 mg/mL");
    let calc = DoseCalculator::new(&medicine);

    assert_eq!(calc.calculate(kg("1.31"), false, 2).unwrap().min(), "0.16");
    assert_eq!(calc.calculate(kg("1.31"), false, 1).unwrap().min(), "0.2");
}

#[test]
fn concentration_parsing_at_default_precision() {
    let cases = [
        ("200mg/mL", "200.00"),
        (" 100 mg / mL ", "100.00"),
        ("200mg / 1mL", "200.00"),
        ("200mg / 6mL", "33.33"),
        ("100mg / 0mL", "100.00"),
    ];

    for (concentration, expected) in cases {
        let medicine = Medicine::new("Concentration").with_concentration(concentration);
        let calc = DoseCalculator::new(&medicine);
        let per_ml = calc.concentration_per_ml(2).unwrap().unwrap();
        assert_eq!(per_ml.to_string(), expected, "concentration {:?}", concentration);
    }
}

#[test]
fn dosing_rates_at_default_precision() {
    let cases = [
        ("20 mg / kg", " 30 mg / kg ", "20.00", "30.00"),
        ("15mg / 1kg", "45mg / 1kg ", "15.00", "45.00"),
        ("15mg / 3kg", "45mg / 4kg", "5.00", "11.25"),
        ("15mg / 0kg", "45mg / 0kg ", "15.00", "45.00"),
    ];

    for (min, max, expected_min, expected_max) in cases {
        let medicine = Medicine::new("Rates").with_min_dose(min).with_max_dose(max);
        let calc = DoseCalculator::new(&medicine);
        assert_eq!(calc.min_dose_per_kg(2).unwrap().unwrap().to_string(), expected_min);
        assert_eq!(calc.max_dose_per_kg(2).unwrap().unwrap().to_string(), expected_max);
    }
}

#[test]
fn missing_concentration_is_an_error() {
    let medicine = Medicine::new("Medicine 1").with_min_dose("20mg/kg");
    let calc = DoseCalculator::new(&medicine);

    let err = calc.calculate(kg("0.834"), false, 2).unwrap_err();
    assert_eq!(err, DoseError::MissingConcentration);
    assert_eq!(err.to_string(), "Unable to calculate dose - missing concentration");
}

#[test]
fn missing_dosing_is_an_error() {
    let medicine = Medicine::new("Medicine 1").with_concentration("50mg/mL");
    let calc = DoseCalculator::new(&medicine);

    let err = calc.calculate_range(kg("0.834"), 2).unwrap_err();
    assert_eq!(err, DoseError::MissingDosing);
    assert_eq!(
        err.to_string(),
        "Unable to calculate dose - missing dosing information"
    );
}

#[test]
fn malformed_strings_name_the_expected_units() {
    let medicine = Medicine::new("Medicine 8").with_min_dose("3mg");
    let calc = DoseCalculator::new(&medicine);
    assert_eq!(
        calc.min_dose_per_kg(2).unwrap_err().to_string(),
        "Value must be in mg/kg"
    );

    let medicine = Medicine::new("Medicine 7").with_concentration("3mg");
    let calc = DoseCalculator::new(&medicine);
    assert_eq!(
        calc.concentration_per_ml(2).unwrap_err().to_string(),
        "Value must be in mg/mL"
    );
}

#[test]
fn no_logged_weight_is_an_error() {
    let medicine = amoxicillin();
    let calc = DoseCalculator::new(&medicine);

    let err = calc.calculate_for(&WeightLog::new(), 2).unwrap_err();
    assert_eq!(err, DoseError::NoWeightLogged);
    assert_eq!(err.to_string(), "No weights logged");
}

#[test]
fn latest_logged_weight_is_used() {
    let medicine = amoxicillin().with_max_dose("40mg/kg");
    let calc = DoseCalculator::new(&medicine);

    let log: WeightLog = [
        ("0.5", Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()),
        ("0.834", Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()),
        ("0.7", Utc.with_ymd_and_hms(2024, 5, 15, 8, 0, 0).unwrap()),
    ]
    .into_iter()
    .map(|(weight, at)| WeightEntry::at(kg(weight), at))
    .collect();

    assert_eq!(calc.calculate_for(&log, 2).unwrap().to_string(), "0.33 - 0.67 mL");
    assert_eq!(calc.calculate_for_default(&log).unwrap().min(), "0.33");
}
