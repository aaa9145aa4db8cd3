/// Source name constants used as identifier prefixes and file stems.
/// These must stay stable: they are hashed into every disaster impact id.
pub const GLIDE_SOURCE: &str = "glide";
pub const GDACS_SOURCE: &str = "gdacs";
pub const CERF_SOURCE: &str = "cerf";
pub const EMDAT_SOURCE: &str = "emdat";
pub const IDMC_SOURCE: &str = "idmc";
pub const IFRC_SOURCE: &str = "ifrc";
pub const DISASTER_CHARTER_SOURCE: &str = "disaster_charter";
pub const ADAM_SOURCE: &str = "adam";

/// Default half-width of the cross-source date window, in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Default search radius for the spatial proximity matcher, in kilometres.
pub const DEFAULT_SPATIAL_RADIUS_KM: f64 = 100.0;

/// Prefix of every cross-source identifier.
pub const DISASTER_IMPACT_ID_PREFIX: &str = "DI_";

/// Separator placed between sorted ids before hashing.
pub const ID_JOIN_SEPARATOR: &str = "|";

/// Suffix the normalisation stage gives its per-source extracts.
pub const STANDARDISED_FILE_SUFFIX: &str = "_standardised";

/// Environment variable naming the pipeline config file.
pub const CONFIG_ENV_VAR: &str = "DISASTER_IMPACT_CONFIG";

/// Map a file stem or label to the canonical source name.
pub fn canonical_source_name(raw: &str) -> String {
    let stem = raw
        .trim()
        .trim_end_matches(STANDARDISED_FILE_SUFFIX)
        .to_lowercase()
        .replace(['-', ' '], "_");
    match stem.as_str() {
        "dc" | "charter" | "disaster_charter" => DISASTER_CHARTER_SOURCE.to_string(),
        "ifrc_eme" | "ifrc_dref" | "dref" | "ifrc" => IFRC_SOURCE.to_string(),
        "idmc_idu" | "idus" | "idmc" => IDMC_SOURCE.to_string(),
        "wfp_adam" | "adam" => ADAM_SOURCE.to_string(),
        other => other.to_string(),
    }
}

/// All sources the normalisation stage is known to produce.
pub fn known_sources() -> Vec<&'static str> {
    vec![
        GLIDE_SOURCE,
        GDACS_SOURCE,
        DISASTER_CHARTER_SOURCE,
        EMDAT_SOURCE,
        IDMC_SOURCE,
        CERF_SOURCE,
        IFRC_SOURCE,
        ADAM_SOURCE,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_source_name() {
        assert_eq!(canonical_source_name("glide_standardised"), "glide");
        assert_eq!(canonical_source_name("IFRC-EME"), "ifrc");
        assert_eq!(canonical_source_name("charter"), "disaster_charter");
        assert_eq!(canonical_source_name("something_new"), "something_new");
    }

    #[test]
    fn test_source_aliases_map_to_known_sources() {
        for alias in ["glide_standardised", "IFRC-EME", "dref", "charter", "idus", "wfp_adam", "cerf"] {
            assert!(known_sources().contains(&canonical_source_name(alias).as_str()), "{}", alias);
        }
        assert!(!known_sources().contains(&canonical_source_name("something_new").as_str()));
    }
}
