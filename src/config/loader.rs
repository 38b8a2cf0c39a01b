//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for assembling a
//! [`ReferenceSnapshot`] from a directory of YAML fixture files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::minimum_wage::{MinimumWageRate, MinimumWageTable};
use crate::models::reference_snapshot::ReferenceSnapshot;
use crate::models::{ApartmentTable, PersonTable, SabbathCache, ShiftKindTable, StandbyRateTable};

use super::types::{
    ApartmentsFile, HousingRatesFile, MonthLocksFile, PeopleFile, ReportsFile, SabbathWeeksFile,
    ShiftKindsFile, StandbyRatesFile,
};
use crate::models::housing::HousingRateTable;

/// Loads and assembles a [`ReferenceSnapshot`] from a directory of YAML
/// fixture files.
///
/// # Directory Structure
///
/// ```text
/// config/fixtures/
/// ├── people.yaml
/// ├── apartments.yaml
/// ├── reports.yaml
/// ├── shift_kinds.yaml
/// ├── standby_rates.yaml
/// ├── housing_rates.yaml
/// ├── sabbath_weeks.yaml
/// ├── month_locks.yaml
/// └── minimum_wage/
///     └── 2025-04-01.yaml   # one row per effective date
/// ```
///
/// # Example
///
/// ```no_run
/// use guide_wage_engine::config::ConfigLoader;
///
/// let snapshot = ConfigLoader::load("./config/fixtures").unwrap();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads a full reference snapshot from the fixture directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if any required file is
    /// missing, or [`EngineError::ConfigParseError`] if a file's YAML
    /// cannot be parsed into its expected shape.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<ReferenceSnapshot> {
        let path = path.as_ref();

        let people: PeopleFile = Self::load_yaml(&path.join("people.yaml"))?;
        let apartments: ApartmentsFile = Self::load_yaml(&path.join("apartments.yaml"))?;
        let reports: ReportsFile = Self::load_yaml(&path.join("reports.yaml"))?;
        let shift_kinds: ShiftKindsFile = Self::load_yaml(&path.join("shift_kinds.yaml"))?;
        let standby_rates: StandbyRatesFile = Self::load_yaml(&path.join("standby_rates.yaml"))?;
        let housing_rates: HousingRatesFile = Self::load_yaml(&path.join("housing_rates.yaml"))?;
        let sabbath_weeks: SabbathWeeksFile = Self::load_yaml(&path.join("sabbath_weeks.yaml"))?;
        let month_locks: MonthLocksFile = Self::load_yaml(&path.join("month_locks.yaml"))?;
        let minimum_wage = Self::load_minimum_wage(&path.join("minimum_wage"))?;

        Ok(ReferenceSnapshot {
            people: PersonTable::new(people.people),
            apartments: ApartmentTable::new(apartments.apartments),
            reports: reports.reports,
            shift_kinds: ShiftKindTable::new(shift_kinds.shift_kinds),
            standby_rates: StandbyRateTable::new(standby_rates.standby_rates),
            housing_rates: HousingRateTable::new(housing_rates.housing_rates),
            sabbath: SabbathCache::new(sabbath_weeks.sabbath_weeks),
            minimum_wage,
            month_locks: month_locks.month_locks,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every minimum-wage rate file from the `minimum_wage/` directory,
    /// one row per effective date.
    fn load_minimum_wage(dir: &Path) -> EngineResult<MinimumWageTable> {
        let dir_str = dir.display().to_string();

        if !dir.exists() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut rates = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let entry_path = entry.path();
            if entry_path.extension().is_some_and(|ext| ext == "yaml") {
                let rate: MinimumWageRate = Self::load_yaml(&entry_path)?;
                rates.push(rate);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{dir_str} (no rate files found)"),
            });
        }

        Ok(MinimumWageTable::new(rates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_directory_returns_config_not_found() {
        let result = ConfigLoader::load("/nonexistent/fixtures/path");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }
}
