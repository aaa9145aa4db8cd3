use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Shared attribute vocabulary produced by per-source normalisation,
/// plus the two columns only the unified table carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Attribute {
    EventId,
    SourceEventIds,
    EventName,
    EventType,
    Country,
    CountryCode,
    Location,
    Latitude,
    Longitude,
    Date,
    Year,
    Month,
    Day,
    Time,
    Severity,
    PopulationAffected,
    Fatalities,
    PeopleDisplaced,
    FinancialLoss,
    AlertLevel,
    Source,
    Comments,
    ExternalLinks,
    DisasterImpactId,
    EventIds,
}

impl Attribute {
    /// The standard attribute set, in output column order.
    pub const STANDARD: [Attribute; 23] = [
        Attribute::EventId,
        Attribute::SourceEventIds,
        Attribute::EventName,
        Attribute::EventType,
        Attribute::Country,
        Attribute::CountryCode,
        Attribute::Location,
        Attribute::Latitude,
        Attribute::Longitude,
        Attribute::Date,
        Attribute::Year,
        Attribute::Month,
        Attribute::Day,
        Attribute::Time,
        Attribute::Severity,
        Attribute::PopulationAffected,
        Attribute::Fatalities,
        Attribute::PeopleDisplaced,
        Attribute::FinancialLoss,
        Attribute::AlertLevel,
        Attribute::Source,
        Attribute::Comments,
        Attribute::ExternalLinks,
    ];

    pub fn column_name(&self) -> &'static str {
        match self {
            Attribute::EventId => "Event_ID",
            Attribute::SourceEventIds => "Source_Event_IDs",
            Attribute::EventName => "Event_Name",
            Attribute::EventType => "Event_Type",
            Attribute::Country => "Country",
            Attribute::CountryCode => "Country_Code",
            Attribute::Location => "Location",
            Attribute::Latitude => "Latitude",
            Attribute::Longitude => "Longitude",
            Attribute::Date => "Date",
            Attribute::Year => "Year",
            Attribute::Month => "Month",
            Attribute::Day => "Day",
            Attribute::Time => "Time",
            Attribute::Severity => "Severity",
            Attribute::PopulationAffected => "Population_Affected",
            Attribute::Fatalities => "Fatalities",
            Attribute::PeopleDisplaced => "People_Displaced",
            Attribute::FinancialLoss => "Financial_Loss",
            Attribute::AlertLevel => "Alert_Level",
            Attribute::Source => "Source",
            Attribute::Comments => "Comments",
            Attribute::ExternalLinks => "External_Links",
            Attribute::DisasterImpactId => "Disaster_Impact_ID",
            Attribute::EventIds => "Event_IDs",
        }
    }

    /// Attributes that identify a group rather than describe it.
    pub fn is_identifier(&self) -> bool {
        matches!(
            self,
            Attribute::EventId | Attribute::DisasterImpactId | Attribute::EventIds
        )
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Attribute {
    type Err = String;

    /// Column names are matched case-insensitively; extracts disagree on casing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Attribute::STANDARD
            .iter()
            .chain([Attribute::DisasterImpactId, Attribute::EventIds].iter())
            .find(|a| a.column_name().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| format!("unknown attribute column: {}", wanted))
    }
}
