//! Property-test run profile parsing for CI and local overrides.
//!
//! Suites read their case count, fork mode, and any suite-specific positive
//! integer knobs through this module so every override is parsed and
//! reported the same way.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const ARBOR_PBT_FORK_ENV_KEY: &str = "ARBOR_PBT_FORK";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Load a profile from environment variables with provided defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        let cases = read_env_or_default(PROGTEST_CASES_ENV_KEY, default_cases, parse_positive);
        let fork = read_env_or_default(ARBOR_PBT_FORK_ENV_KEY, default_fork, parse_bool);
        Self { cases, fork }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub fn fork(&self) -> bool { self.fork }
}

/// Reads a strictly positive integer override from `key`.
///
/// Missing, unparsable, or zero values fall back to `default` and invalid
/// ones are logged.
///
/// # Examples
///
/// ```
/// use arbor_test_support::ci::property_test_profile::positive_env_override;
///
/// let threads: usize = positive_env_override("ARBOR_DOC_UNSET_KNOB", 4);
/// assert_eq!(threads, 4);
/// ```
#[must_use]
pub fn positive_env_override<T>(key: &'static str, default: T) -> T
where
    T: Copy + PartialEq + std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    read_env_or_default(key, default, parse_positive)
}

fn read_env_or_default<T, F>(key: &'static str, default: T, parser: F) -> T
where
    T: Copy,
    F: Fn(&str) -> Result<T, String>,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parser(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_positive<T>(raw: &str) -> Result<T, String>
where
    T: PartialEq + std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    let parsed = raw
        .trim()
        .parse::<T>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == T::default() {
        return Err("value must be > 0".to_owned());
    }
    Ok(parsed)
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
