// src/config/mod.rs
//
// Circulation policy
//
// Tunable limits for loans, fines and holds. The validator constants
// (search length, ISBN length) are fixed and deliberately not here.
//
// Policy file: {CONFIG_DIR}/davon-library/policy.json
// Missing keys fall back to the defaults below.

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const DEFAULT_MAX_ACTIVE_LOANS: usize = 5;
pub const DEFAULT_MAX_LOAN_EXTENSIONS: u32 = 2;
pub const DEFAULT_DAILY_FINE_CENTS: u64 = 50;
pub const DEFAULT_LOAN_PERIOD_DAYS: u32 = 14;
pub const DEFAULT_EXTENSION_DAYS: u32 = 14;
pub const DEFAULT_RESERVATION_HOLD_DAYS: u32 = 7;

const POLICY_DIR: &str = "davon-library";
const POLICY_FILE: &str = "policy.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryPolicy {
    /// Unreturned loans a member may hold at once
    pub max_active_loans: usize,

    pub max_loan_extensions: u32,

    /// Overdue fine per day, in cents. Zero disables fines.
    pub daily_fine_cents: u64,

    pub default_loan_period_days: u32,

    /// Days added by one loan extension
    pub extension_days: u32,

    /// Days a fulfilled reservation is held for pickup
    pub reservation_hold_days: u32,
}

impl Default for LibraryPolicy {
    fn default() -> Self {
        Self {
            max_active_loans: DEFAULT_MAX_ACTIVE_LOANS,
            max_loan_extensions: DEFAULT_MAX_LOAN_EXTENSIONS,
            daily_fine_cents: DEFAULT_DAILY_FINE_CENTS,
            default_loan_period_days: DEFAULT_LOAN_PERIOD_DAYS,
            extension_days: DEFAULT_EXTENSION_DAYS,
            reservation_hold_days: DEFAULT_RESERVATION_HOLD_DAYS,
        }
    }
}

impl LibraryPolicy {
    /// Parse and check a policy document
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let policy = Self::from_json_str(&contents)?;
        info!("Loaded library policy from {}", path.display());
        Ok(policy)
    }

    /// Policy from the user config directory, or the defaults when no
    /// file exists there
    pub fn load_or_default() -> AppResult<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            Some(path) => {
                debug!("No policy file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                debug!("No config directory available, using default policy");
                Ok(Self::default())
            }
        }
    }

    /// {CONFIG_DIR}/davon-library/policy.json
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(POLICY_DIR).join(POLICY_FILE))
    }

    /// Every limit and period must be positive
    pub fn validate(&self) -> AppResult<()> {
        let checks = [
            ("max_active_loans", self.max_active_loans as u64),
            ("max_loan_extensions", u64::from(self.max_loan_extensions)),
            ("default_loan_period_days", u64::from(self.default_loan_period_days)),
            ("extension_days", u64::from(self.extension_days)),
            ("reservation_hold_days", u64::from(self.reservation_hold_days)),
        ];
        for (name, value) in checks {
            if value == 0 {
                return Err(AppError::Config(format!(
                    "{} must be greater than zero",
                    name
                )));
            }
        }
        Ok(())
    }
}
