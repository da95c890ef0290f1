// ============================================================================
// Basic Usage Example
// ============================================================================

use chrono::{Duration, Utc};
use dose_calculator::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<(), DoseError> {
    println!("=== Dose Calculator Example ===\n");

    let medicines = [
        Medicine::new("Amoxicillin")
            .with_min_dose("20mg/kg")
            .with_max_dose("40mg/kg")
            .with_concentration("50mg/mL"),
        Medicine::new("Azithromycin")
            .with_min_dose("5mg/kg")
            .with_concentration("100 mg / 5 mL"),
        Medicine::new("Famotidine")
            .with_min_dose("0.5mg/kg")
            .with_concentration("4mg/mL"),
        Medicine::new("Unlabelled").with_min_dose("10mg/kg"),
    ];

    // Weight history for one patient; the newest entry is used
    let now = Utc::now();
    let log: WeightLog = [
        (Decimal::new(790, 3), now - Duration::days(14)),
        (Decimal::new(834, 3), now - Duration::days(1)),
        (Decimal::new(812, 3), now - Duration::days(7)),
    ]
    .into_iter()
    .map(|(kg, at)| WeightEntry::at(kg, at))
    .collect();

    if let Some(latest) = log.latest_weight() {
        println!("Latest weight: {} kg (logged {})\n", latest.weight_kg, latest.created_at);
    }

    for medicine in &medicines {
        let calc = DoseCalculator::new(medicine);
        match calc.calculate_for(&log, 2) {
            Ok(dose) => println!("{:<14} {}", medicine.name, dose),
            Err(err) => println!("{:<14} error: {}", medicine.name, err),
        }
    }

    // Finer precision for a syringe driver
    let calc = DoseCalculator::new(&medicines[0]);
    println!("\nAmoxicillin at 4 digits: {}", calc.calculate_for(&log, 4)?);

    Ok(())
}
