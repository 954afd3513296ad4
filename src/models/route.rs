//! Route model and related types.
//!
//! This module defines the [`Route`] categories a person can select, the
//! unconditional [`FixedRoute`] subset, and the [`BenefitsDuration`] bucket
//! asked on the benefits route.

use serde::{Deserialize, Serialize};

/// The situation category that drives the base qualifying period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// High earner on a Skilled Worker or similar route (salary-based).
    HighEarner,
    /// Global Talent, Innovator Founder or another fast-track route.
    FastTrack,
    /// Frontline public service (NHS doctor, nurse, teacher etc.).
    PublicService,
    /// Immediate family of a British citizen or Hong Kong BN(O).
    FamilyOfCitizen,
    /// Health & Care Worker or lower-paid worker below RQF level 6.
    LowerPaid,
    /// General skilled or economic migrant.
    GeneralSkilled,
    /// Relying on benefits or some protection routes.
    Benefits,
    /// Illegal entry or long overstay.
    IllegalEntry,
}

impl Route {
    /// Every route, in the order the form presents them.
    pub const ALL: [Route; 8] = [
        Route::HighEarner,
        Route::FastTrack,
        Route::PublicService,
        Route::FamilyOfCitizen,
        Route::LowerPaid,
        Route::GeneralSkilled,
        Route::Benefits,
        Route::IllegalEntry,
    ];

    /// Returns the snake_case identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::HighEarner => "high_earner",
            Route::FastTrack => "fast_track",
            Route::PublicService => "public_service",
            Route::FamilyOfCitizen => "family_of_citizen",
            Route::LowerPaid => "lower_paid",
            Route::GeneralSkilled => "general_skilled",
            Route::Benefits => "benefits",
            Route::IllegalEntry => "illegal_entry",
        }
    }

    /// Returns the human-readable option text.
    ///
    /// # Examples
    ///
    /// ```
    /// use ilr_engine::models::Route;
    ///
    /// assert_eq!(Route::IllegalEntry.label(), "Illegal migrant / long overstay");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            Route::HighEarner => "High earner on a Skilled Worker / similar route",
            Route::FastTrack => "Global Talent / Innovator Founder / fast-track route",
            Route::PublicService => "Frontline public service (NHS doctor, nurse, teacher etc.)",
            Route::FamilyOfCitizen => "Immediate family of British citizen / Hong Kong BN(O)",
            Route::LowerPaid => "Health & Care Worker / lower-paid worker (below RQF level 6)",
            Route::GeneralSkilled => "General skilled / economic migrant",
            Route::Benefits => "Relying on benefits / some protection routes (practice example)",
            Route::IllegalEntry => "Illegal migrant / long overstay",
        }
    }

    /// Returns the informational note shown alongside the route.
    pub fn guidance(&self) -> &'static str {
        match self {
            Route::HighEarner => {
                "Baseline qualifying period is 10 years. A salary of at least £50,270 gives a \
                 5-year route; at least £125,140 held for the last 3 years gives a 3-year route."
            }
            Route::FastTrack => {
                "3 years continuous residence as Global Talent / Innovator Founder reduces the \
                 baseline by up to 7 years."
            }
            Route::PublicService => "Public service roles may get a 5-year reduction (5-year route).",
            Route::FamilyOfCitizen => {
                "Partners, parents and children get a 5-year reduction (5-year route)."
            }
            Route::LowerPaid => {
                "Consultation proposal: increase the qualifying period to 15 years for lower-paid roles."
            }
            Route::GeneralSkilled => {
                "Default earned settlement qualifying period increased to 10 years."
            }
            Route::Benefits => {
                "Public funds contribution: under 12 months on benefits adds 5 years; \
                 12 months or more adds 10 years."
            }
            Route::IllegalEntry => {
                "Entering illegally or overstaying 6+ months may add up to 20 years to the \
                 10-year baseline."
            }
        }
    }

    /// Returns the source table the route's rule is drawn from.
    pub fn source_ref(&self) -> &'static str {
        match self {
            Route::HighEarner
            | Route::FastTrack
            | Route::PublicService
            | Route::FamilyOfCitizen => "CP 1448 Table 2",
            Route::LowerPaid => "CP 1448 consultation",
            Route::GeneralSkilled => "CP 1448 earned settlement",
            Route::Benefits | Route::IllegalEntry => "CP 1448 Table 3",
        }
    }

    /// Returns the unconditional form of this route, if it has one.
    pub fn as_fixed(&self) -> Option<FixedRoute> {
        match self {
            Route::FastTrack => Some(FixedRoute::FastTrack),
            Route::PublicService => Some(FixedRoute::PublicService),
            Route::FamilyOfCitizen => Some(FixedRoute::FamilyOfCitizen),
            Route::LowerPaid => Some(FixedRoute::LowerPaid),
            Route::GeneralSkilled => Some(FixedRoute::GeneralSkilled),
            Route::IllegalEntry => Some(FixedRoute::IllegalEntry),
            Route::HighEarner | Route::Benefits => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A route whose base years do not depend on any sub-answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixedRoute {
    /// Global Talent / Innovator Founder / fast-track.
    FastTrack,
    /// Frontline public service.
    PublicService,
    /// Immediate family of a British citizen.
    FamilyOfCitizen,
    /// Health & Care / lower-paid worker.
    LowerPaid,
    /// General skilled / economic migrant.
    GeneralSkilled,
    /// Illegal entry / long overstay.
    IllegalEntry,
}

impl From<FixedRoute> for Route {
    fn from(route: FixedRoute) -> Self {
        match route {
            FixedRoute::FastTrack => Route::FastTrack,
            FixedRoute::PublicService => Route::PublicService,
            FixedRoute::FamilyOfCitizen => Route::FamilyOfCitizen,
            FixedRoute::LowerPaid => Route::LowerPaid,
            FixedRoute::GeneralSkilled => Route::GeneralSkilled,
            FixedRoute::IllegalEntry => Route::IllegalEntry,
        }
    }
}

/// Total time spent relying on public funds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitsDuration {
    /// Less than one year in total.
    #[default]
    UnderTwelveMonths,
    /// One year or more in total.
    TwelveMonthsOrMore,
}

impl BenefitsDuration {
    /// Returns the snake_case identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            BenefitsDuration::UnderTwelveMonths => "under_twelve_months",
            BenefitsDuration::TwelveMonthsOrMore => "twelve_months_or_more",
        }
    }
}
