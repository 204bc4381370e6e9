//! Environment-driven knobs shared by CI and local property-test runs.

pub mod property_test_profile;
