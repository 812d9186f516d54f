//! Shared test utilities for `treecut-core`.

use proptest::test_runner::Config as ProptestConfig;
use treecut_test_support::ci::property_test_profile::ProptestRunProfile;

/// Builds a proptest configuration from the shared run profile so every
/// suite honours `PROPTEST_CASES` and `TREECUT_PBT_FORK` the same way.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
