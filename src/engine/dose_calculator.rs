// ============================================================================
// Dose Calculator
// Turns dosing rate, concentration and body weight into a volume
// ============================================================================

use super::errors::{CalcResult, DoseError};
use super::fraction::{FractionParser, MG_PER_KG, MG_PER_ML};
use crate::domain::{CalculatorConfig, DoseResult};
use crate::interfaces::{DosingSpecification, Weighable};
use crate::numeric::ExactDecimal;
use rust_decimal::Decimal;

/// Computes dose volumes for one dosing specification.
///
/// ```text
///        dosing * weight   (mg/kg) * (kg)
/// Dose = --------------- = -------------- = mL
///         concentration       (mg/mL)
/// ```
///
/// Every intermediate step runs at `final_precision + 1` digits and
/// truncates; only the final volume is rounded (half away from zero) to
/// `final_precision`.
///
/// # Example
/// ```
/// use dose_calculator::prelude::*;
/// use rust_decimal::Decimal;
///
/// let medicine = Medicine::new("Amoxicillin")
///     .with_min_dose("20mg/kg")
///     .with_max_dose("40mg/kg")
///     .with_concentration("50mg/mL");
///
/// let calc = DoseCalculator::new(&medicine);
/// let dose = calc.calculate_range(Decimal::new(834, 3), 2).unwrap();
/// assert_eq!(dose.to_string(), "0.33 - 0.67 mL");
/// ```
#[derive(Debug)]
pub struct DoseCalculator<'a, S: DosingSpecification + ?Sized> {
    specification: &'a S,
    config: CalculatorConfig,
    dose_parser: FractionParser,
    concentration_parser: FractionParser,
}

impl<S: DosingSpecification + ?Sized> Clone for DoseCalculator<'_, S> {
    fn clone(&self) -> Self {
        Self {
            specification: self.specification,
            config: self.config.clone(),
            dose_parser: self.dose_parser.clone(),
            concentration_parser: self.concentration_parser.clone(),
        }
    }
}

impl<'a, S: DosingSpecification + ?Sized> DoseCalculator<'a, S> {
    /// Create a calculator with the default `mg/kg`, `mg/mL` grammars.
    pub fn new(specification: &'a S) -> Self {
        Self {
            specification,
            config: CalculatorConfig::default(),
            dose_parser: MG_PER_KG.clone(),
            concentration_parser: MG_PER_ML.clone(),
        }
    }

    /// Create a calculator with custom units or precision bounds.
    ///
    /// # Errors
    /// `InvalidConfig` if the configuration does not validate.
    pub fn with_config(specification: &'a S, config: CalculatorConfig) -> CalcResult<Self> {
        config.validate().map_err(DoseError::InvalidConfig)?;

        let (dose_parser, concentration_parser) = if config.uses_default_units() {
            (MG_PER_KG.clone(), MG_PER_ML.clone())
        } else {
            (
                FractionParser::new(&config.mass_unit, &config.weight_unit)?,
                FractionParser::new(&config.mass_unit, &config.volume_unit)?,
            )
        };

        Ok(Self {
            specification,
            config,
            dose_parser,
            concentration_parser,
        })
    }

    pub fn specification(&self) -> &'a S {
        self.specification
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    // ========================================================================
    // Per-field rates
    // ========================================================================

    /// Parse a dosing-rate string into mg per kg.
    pub fn dose_per_kg(&self, dose: Option<&str>, precision: u32) -> CalcResult<Option<ExactDecimal>> {
        self.dose_parser.parse(dose, precision)
    }

    pub fn min_dose_per_kg(&self, precision: u32) -> CalcResult<Option<ExactDecimal>> {
        self.dose_per_kg(self.specification.min_dose(), precision)
    }

    /// Falls back to the minimum dose when no maximum is set.
    pub fn max_dose_per_kg(&self, precision: u32) -> CalcResult<Option<ExactDecimal>> {
        let dose = self
            .specification
            .max_dose()
            .or_else(|| self.specification.min_dose());
        self.dose_per_kg(dose, precision)
    }

    pub fn concentration_per_ml(&self, precision: u32) -> CalcResult<Option<ExactDecimal>> {
        self.concentration_parser
            .parse(self.specification.concentration(), precision)
    }

    // ========================================================================
    // Volume calculation
    // ========================================================================

    fn check_precision(&self, final_precision: u32) -> CalcResult<()> {
        if final_precision > self.config.max_precision {
            return Err(DoseError::PrecisionOutOfRange {
                requested: final_precision,
                max: self.config.max_precision,
            });
        }
        Ok(())
    }

    /// Volume for one dosing rate (minimum, or maximum when `use_max`).
    ///
    /// # Errors
    /// - `MissingConcentration` if the concentration is unset
    /// - `MissingDosing` if no dosing rate is set
    /// - `Format` if a present string is malformed
    pub fn calculate(
        &self,
        weight_kg: Decimal,
        use_max: bool,
        final_precision: u32,
    ) -> CalcResult<DoseResult> {
        self.check_precision(final_precision)?;
        let working_precision = final_precision + 1;

        let concentration = self.concentration_per_ml(working_precision)?;
        let dosing = if use_max {
            self.max_dose_per_kg(working_precision)?
        } else {
            self.min_dose_per_kg(working_precision)?
        };

        let concentration = concentration.ok_or(DoseError::MissingConcentration)?;
        let dosing = dosing.ok_or(DoseError::MissingDosing)?;
        let weight = ExactDecimal::from_decimal(weight_kg)?;

        let dose = dosing
            .mul_trunc(weight, working_precision)?
            .div_trunc(concentration, working_precision)?;
        let volume = dose.round_half_away(final_precision)?;

        tracing::debug!(
            %weight,
            %dosing,
            %concentration,
            %dose,
            %volume,
            use_max,
            final_precision,
            "calculated dose volume"
        );

        Ok(DoseResult::new(
            volume.to_string(),
            None::<String>,
            Some(self.config.volume_unit.as_str()),
        ))
    }

    /// Volume range from the minimum and maximum dosing rates.
    ///
    /// Collapses to a single value when both ends round to the same volume.
    pub fn calculate_range(&self, weight_kg: Decimal, final_precision: u32) -> CalcResult<DoseResult> {
        let low = self.calculate(weight_kg, false, final_precision)?;
        let high = self.calculate(weight_kg, true, final_precision)?;

        if low.equals(&high) {
            return Ok(low);
        }

        Ok(DoseResult::new(
            low.min(),
            Some(high.min()),
            Some(self.config.volume_unit.as_str()),
        ))
    }

    /// Volume range for the most recently logged weight of `subject`.
    ///
    /// # Errors
    /// `NoWeightLogged` if the subject has no weight history.
    pub fn calculate_for<W: Weighable + ?Sized>(
        &self,
        subject: &W,
        final_precision: u32,
    ) -> CalcResult<DoseResult> {
        let entry = subject.latest_weight().ok_or(DoseError::NoWeightLogged)?;

        tracing::debug!(
            weight_id = %entry.id,
            weight_kg = %entry.weight_kg,
            created_at = %entry.created_at,
            "using latest logged weight"
        );

        self.calculate_range(entry.weight_kg, final_precision)
    }

    // ========================================================================
    // Default-precision conveniences
    // ========================================================================

    pub fn calculate_default(&self, weight_kg: Decimal, use_max: bool) -> CalcResult<DoseResult> {
        self.calculate(weight_kg, use_max, self.config.default_precision)
    }

    pub fn calculate_range_default(&self, weight_kg: Decimal) -> CalcResult<DoseResult> {
        self.calculate_range(weight_kg, self.config.default_precision)
    }

    pub fn calculate_for_default<W: Weighable + ?Sized>(&self, subject: &W) -> CalcResult<DoseResult> {
        self.calculate_for(subject, self.config.default_precision)
    }
}
