use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::consolidate::{Consolidator, EmptyIdPolicy};
use crate::constants::{ADAM_SOURCE, CONFIG_ENV_VAR, DEFAULT_SPATIAL_RADIUS_KM, DEFAULT_WINDOW_DAYS};
use crate::error::{PipelineError, Result};
use crate::link::{LinkagePolicy, MatchKey, SpatialProximityMatcher};
use crate::merge::SourcePriority;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    pub linkage: LinkageConfig,
    pub consolidation: ConsolidationConfig,
    pub spatial: SpatialConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinkageConfig {
    /// Half-width of the date window, in days
    pub window_days: i64,
    pub match_key: MatchKey,
    /// Sources whose scalar values win conflicts, most trusted first
    pub source_priority: Vec<String>,
    pub pair_windows: Vec<PairWindow>,
}

impl Default for LinkageConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            match_key: MatchKey::default(),
            source_priority: Vec::new(),
            pair_windows: Vec::new(),
        }
    }
}

/// Window override for one unordered pair of sources.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PairWindow {
    pub sources: [String; 2],
    pub window_days: i64,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConsolidationConfig {
    pub on_empty_source_ids: EmptyIdPolicy,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpatialConfig {
    pub enabled: bool,
    /// Point source matched by proximity instead of the main linker
    pub source: String,
    pub radius_km: f64,
    pub require_same_event_type: bool,
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            source: ADAM_SOURCE.to_string(),
            radius_km: DEFAULT_SPATIAL_RADIUS_KM,
            require_same_event_type: true,
        }
    }
}

impl PipelineConfig {
    /// Load from `path`, else from the file named by the environment
    /// variable, else fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from));
        match path {
            Some(path) => Self::from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: PipelineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.linkage_policy().validate()?;
        if !(self.spatial.radius_km.is_finite() && self.spatial.radius_km >= 0.0) {
            return Err(PipelineError::Config(format!(
                "spatial.radius_km must be a non-negative number, got {}",
                self.spatial.radius_km
            )));
        }
        if self.spatial.enabled && self.spatial.source.trim().is_empty() {
            return Err(PipelineError::Config(
                "spatial.source must name a source when spatial matching is enabled".to_string(),
            ));
        }
        Ok(())
    }

    pub fn linkage_policy(&self) -> LinkagePolicy {
        let policy = self
            .linkage
            .pair_windows
            .iter()
            .fold(LinkagePolicy::default(), |policy, pair| {
                policy.with_pair_window(&pair.sources[0], &pair.sources[1], pair.window_days)
            });
        policy
            .with_window_days(self.linkage.window_days)
            .with_match_key(self.linkage.match_key)
            .with_priority(SourcePriority::new(self.linkage.source_priority.iter().cloned()))
    }

    pub fn consolidator(&self) -> Consolidator {
        Consolidator::new(self.consolidation.on_empty_source_ids)
    }

    /// The proximity matcher, when enabled.
    pub fn spatial_matcher(&self) -> Option<SpatialProximityMatcher> {
        if !self.spatial.enabled {
            return None;
        }
        let priority = SourcePriority::new(self.linkage.source_priority.iter().cloned());
        let matcher = SpatialProximityMatcher::new(self.spatial.radius_km, self.spatial.require_same_event_type);
        Some(if priority.is_empty() {
            matcher
        } else {
            matcher.with_order(Arc::new(priority))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PipelineConfig::from_toml("").unwrap();
        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.linkage.window_days, 7);
        assert_eq!(config.linkage.match_key, MatchKey::CountryCode);
        assert_eq!(config.consolidation.on_empty_source_ids, EmptyIdPolicy::Fail);
        assert!(config.spatial_matcher().is_none());
    }

    #[test]
    fn test_full_config() {
        let config = PipelineConfig::from_toml(
            r#"
            [linkage]
            window_days = 10
            match_key = "country"
            source_priority = ["emdat", "glide"]

            [[linkage.pair_windows]]
            sources = ["gdacs", "glide"]
            window_days = 14

            [consolidation]
            on_empty_source_ids = "skip"

            [spatial]
            enabled = true
            radius_km = 50.0
            "#,
        )
        .unwrap();

        let policy = config.linkage_policy();
        assert_eq!(policy.window_days, 10);
        assert_eq!(policy.match_key, MatchKey::Country);
        assert_eq!(policy.window_for("glide", "gdacs"), 14);
        assert_eq!(policy.priority.rank_of("emdat"), 0);
        assert_eq!(config.consolidation.on_empty_source_ids, EmptyIdPolicy::Skip);

        let matcher = config.spatial_matcher().unwrap();
        assert_eq!(matcher.radius_km, 50.0);
        assert_eq!(config.spatial.source, "adam");
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(PipelineConfig::from_toml("[linkage]\nwindow_days = -3").is_err());
        assert!(PipelineConfig::from_toml("[spatial]\nradius_km = -1.0").is_err());
        assert!(PipelineConfig::from_toml("[linkage]\nmatch_key = \"region\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.toml");
        fs::write(&path, "[linkage]\nwindow_days = 3\n").unwrap();
        let config = PipelineConfig::load(Some(&path)).unwrap();
        assert_eq!(config.linkage.window_days, 3);

        assert!(PipelineConfig::load(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
