//! Rule set types for qualifying period assessment.
//!
//! This module contains the strongly-typed rule structures that are
//! deserialized from a YAML rule set file, plus the built-in canonical table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{BenefitsDuration, FixedRoute, Route};

/// Metadata about the rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetMetadata {
    /// The human-readable name of the rule set.
    pub name: String,
    /// The version of the rule set.
    pub version: String,
    /// URL to the publication the rules are drawn from.
    pub source_url: String,
}

/// Salary route thresholds and the base years of each band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRules {
    /// Base years below the lower threshold.
    pub baseline_years: u32,
    /// Salary at or above which the lower band applies.
    pub lower_threshold: Decimal,
    /// Base years in the lower band.
    pub lower_years: u32,
    /// Salary at or above which the upper band applies, if held for three years.
    pub upper_threshold: Decimal,
    /// Base years in the upper band.
    pub upper_years: u32,
}

/// Benefits route base and the extra years per duration bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitsRules {
    /// Years before any public funds penalty.
    pub base_years: u32,
    /// Extra years for less than 12 months on benefits.
    pub under_twelve_months_extra: u32,
    /// Extra years for 12 months or more on benefits.
    pub twelve_months_or_more_extra: u32,
}

impl BenefitsRules {
    /// Returns the extra years for a duration bucket.
    pub fn extra_years(&self, duration: BenefitsDuration) -> u32 {
        match duration {
            BenefitsDuration::UnderTwelveMonths => self.under_twelve_months_extra,
            BenefitsDuration::TwelveMonthsOrMore => self.twelve_months_or_more_extra,
        }
    }
}

/// Base years for each unconditional route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedRouteYears {
    /// Global Talent / Innovator Founder / fast-track.
    pub fast_track: u32,
    /// Frontline public service.
    pub public_service: u32,
    /// Immediate family of a British citizen.
    pub family_of_citizen: u32,
    /// Health & Care / lower-paid worker.
    pub lower_paid: u32,
    /// General skilled / economic migrant.
    pub general_skilled: u32,
    /// Illegal entry / long overstay.
    pub illegal_entry: u32,
}

impl FixedRouteYears {
    /// Returns the base years for a fixed route.
    pub fn years_for(&self, route: FixedRoute) -> u32 {
        match route {
            FixedRoute::FastTrack => self.fast_track,
            FixedRoute::PublicService => self.public_service,
            FixedRoute::FamilyOfCitizen => self.family_of_citizen,
            FixedRoute::LowerPaid => self.lower_paid,
            FixedRoute::GeneralSkilled => self.general_skilled,
            FixedRoute::IllegalEntry => self.illegal_entry,
        }
    }
}

/// English proficiency adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnglishRules {
    /// Years deducted when C1 English is held.
    pub c1_reduction_years: u32,
    /// The floor the deduction cannot go below.
    pub minimum_years: u32,
}

/// The complete rule set used by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Rule set metadata.
    pub metadata: RuleSetMetadata,
    /// Salary route rules.
    pub salary: SalaryRules,
    /// Benefits route rules.
    pub benefits: BenefitsRules,
    /// Unconditional route bases.
    pub fixed_routes: FixedRouteYears,
    /// English adjustment rules.
    pub english: EnglishRules,
}

impl RuleSet {
    /// Returns the canonical practice rule set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ilr_engine::config::RuleSet;
    /// use rust_decimal::Decimal;
    ///
    /// let rules = RuleSet::canonical();
    /// assert_eq!(rules.salary.lower_threshold, Decimal::new(50_270, 0));
    /// assert_eq!(rules.fixed_routes.illegal_entry, 30);
    /// ```
    pub fn canonical() -> Self {
        Self {
            metadata: RuleSetMetadata {
                name: "A Fairer Pathway to Settlement (practice)".to_string(),
                version: "2025-11".to_string(),
                source_url: "https://www.gov.uk/government/news/biggest-overhaul-of-legal-migration-model-in-50-years-announced".to_string(),
            },
            salary: SalaryRules {
                baseline_years: 10,
                lower_threshold: Decimal::new(50_270, 0),
                lower_years: 5,
                upper_threshold: Decimal::new(125_140, 0),
                upper_years: 3,
            },
            benefits: BenefitsRules {
                base_years: 10,
                under_twelve_months_extra: 5,
                twelve_months_or_more_extra: 10,
            },
            fixed_routes: FixedRouteYears {
                fast_track: 3,
                public_service: 5,
                family_of_citizen: 5,
                lower_paid: 15,
                general_skilled: 10,
                illegal_entry: 30,
            },
            english: EnglishRules {
                c1_reduction_years: 1,
                minimum_years: 1,
            },
        }
    }

    /// Returns the base years of a route when it does not depend on sub-answers.
    pub fn fixed_years(&self, route: Route) -> Option<u32> {
        route
            .as_fixed()
            .map(|fixed| self.fixed_routes.years_for(fixed))
    }

    /// Checks that the rule values are consistent with each other.
    ///
    /// # Returns
    ///
    /// Returns `InvalidRuleSet` if:
    /// - A salary threshold is negative
    /// - The lower threshold exceeds the upper threshold
    /// - The minimum years is zero
    /// - Any base value is below the minimum years
    /// - A benefits total does not fit in a `u32`
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: String| Err(EngineError::InvalidRuleSet { message });

        if self.salary.lower_threshold < Decimal::ZERO {
            return invalid(format!(
                "salary.lower_threshold must not be negative (got {})",
                self.salary.lower_threshold
            ));
        }

        if self.salary.lower_threshold > self.salary.upper_threshold {
            return invalid(format!(
                "salary.lower_threshold {} exceeds salary.upper_threshold {}",
                self.salary.lower_threshold, self.salary.upper_threshold
            ));
        }

        let minimum = self.english.minimum_years;
        if minimum == 0 {
            return invalid("english.minimum_years must be at least 1".to_string());
        }

        let bases = [
            ("salary.baseline_years", self.salary.baseline_years),
            ("salary.lower_years", self.salary.lower_years),
            ("salary.upper_years", self.salary.upper_years),
            ("benefits.base_years", self.benefits.base_years),
            ("fixed_routes.fast_track", self.fixed_routes.fast_track),
            ("fixed_routes.public_service", self.fixed_routes.public_service),
            ("fixed_routes.family_of_citizen", self.fixed_routes.family_of_citizen),
            ("fixed_routes.lower_paid", self.fixed_routes.lower_paid),
            ("fixed_routes.general_skilled", self.fixed_routes.general_skilled),
            ("fixed_routes.illegal_entry", self.fixed_routes.illegal_entry),
        ];

        if let Some((name, years)) = bases.iter().find(|(_, years)| *years < minimum) {
            return invalid(format!(
                "{} is {} but english.minimum_years is {}",
                name, years, minimum
            ));
        }

        for duration in [BenefitsDuration::UnderTwelveMonths, BenefitsDuration::TwelveMonthsOrMore] {
            let extra = self.benefits.extra_years(duration);
            if self.benefits.base_years.checked_add(extra).is_none() {
                return invalid(format!(
                    "benefits.base_years {} plus {} extra years for {} overflows",
                    self.benefits.base_years,
                    extra,
                    duration.as_str()
                ));
            }
        }

        Ok(())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_rule_set_is_valid() {
        assert!(RuleSet::canonical().validate().is_ok());
    }

    #[test]
    fn test_default_is_canonical() {
        assert_eq!(RuleSet::default(), RuleSet::canonical());
    }

    #[test]
    fn test_fixed_years_for_each_route() {
        let rules = RuleSet::canonical();
        assert_eq!(rules.fixed_years(Route::FastTrack), Some(3));
        assert_eq!(rules.fixed_years(Route::PublicService), Some(5));
        assert_eq!(rules.fixed_years(Route::FamilyOfCitizen), Some(5));
        assert_eq!(rules.fixed_years(Route::LowerPaid), Some(15));
        assert_eq!(rules.fixed_years(Route::GeneralSkilled), Some(10));
        assert_eq!(rules.fixed_years(Route::IllegalEntry), Some(30));
        assert_eq!(rules.fixed_years(Route::HighEarner), None);
        assert_eq!(rules.fixed_years(Route::Benefits), None);
    }

    #[test]
    fn test_benefits_extra_years_by_bucket() {
        let rules = RuleSet::canonical();
        assert_eq!(
            rules.benefits.extra_years(BenefitsDuration::UnderTwelveMonths),
            5
        );
        assert_eq!(
            rules.benefits.extra_years(BenefitsDuration::TwelveMonthsOrMore),
            10
        );
    }

    #[test]
    fn test_inverted_thresholds_are_rejected() {
        let mut rules = RuleSet::canonical();
        rules.salary.lower_threshold = Decimal::new(200_000, 0);

        match rules.validate() {
            Err(EngineError::InvalidRuleSet { message }) => {
                assert!(message.contains("exceeds"));
            }
            other => panic!("Expected InvalidRuleSet, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_threshold_is_rejected() {
        let mut rules = RuleSet::canonical();
        rules.salary.lower_threshold = Decimal::new(-1, 0);
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_zero_minimum_years_is_rejected() {
        let mut rules = RuleSet::canonical();
        rules.english.minimum_years = 0;

        match rules.validate() {
            Err(EngineError::InvalidRuleSet { message }) => {
                assert!(message.contains("minimum_years"));
            }
            other => panic!("Expected InvalidRuleSet, got {:?}", other),
        }
    }

    #[test]
    fn test_base_below_minimum_is_rejected() {
        let mut rules = RuleSet::canonical();
        rules.english.minimum_years = 4;

        match rules.validate() {
            Err(EngineError::InvalidRuleSet { message }) => {
                assert!(message.contains("salary.upper_years"));
            }
            other => panic!("Expected InvalidRuleSet, got {:?}", other),
        }
    }

    #[test]
    fn test_benefits_total_overflow_is_rejected() {
        let mut rules = RuleSet::canonical();
        rules.benefits.base_years = u32::MAX;
        rules.benefits.under_twelve_months_extra = 0;
        rules.benefits.twelve_months_or_more_extra = 1;

        match rules.validate() {
            Err(EngineError::InvalidRuleSet { message }) => {
                assert!(message.contains("twelve_months_or_more"));
                assert!(message.contains("overflows"));
            }
            other => panic!("Expected InvalidRuleSet, got {:?}", other),
        }
    }

    #[test]
    fn test_largest_benefits_total_is_accepted() {
        let mut rules = RuleSet::canonical();
        rules.benefits.base_years = u32::MAX - 10;
        assert!(rules.validate().is_ok());
    }
}
