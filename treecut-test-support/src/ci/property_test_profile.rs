//! Property-test run profile read from the environment.
//!
//! Suites call [`ProptestRunProfile::load`] with their own defaults; CI can
//! raise the case count or enable forking without touching the code.

use std::env;
use std::fmt;

/// Overrides the number of cases each property runs.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Runs each proptest case in a forked subprocess when truthy.
pub const TREECUT_PBT_FORK_ENV_KEY: &str = "TREECUT_PBT_FORK";

/// Resolved proptest settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads the profile, falling back to the given defaults when a variable
    /// is unset or malformed. Malformed values are logged at `warn`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treecut_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROPTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(TREECUT_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub fn fork(&self) -> bool { self.fork }
}

/// Why an override value was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
enum OverrideError {
    NotANumber(String),
    ZeroCases,
    UnknownFlag,
}

impl fmt::Display for OverrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(detail) => write!(f, "not a number: {detail}"),
            Self::ZeroCases => f.write_str("cases must be greater than zero"),
            Self::UnknownFlag => f.write_str("expected one of true/false/1/0/yes/no/on/off"),
        }
    }
}

fn override_or<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, OverrideError>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(env = key, raw = %raw, %reason, "ignoring invalid property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(error) => Err(OverrideError::NotANumber(error.to_string())),
    }
}

fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::UnknownFlag),
    }
}
