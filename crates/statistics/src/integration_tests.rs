//! Integration tests for the statistics plugin using the `TestHost` harness.
//!
//! These run a headless Bevy App with `StatisticsPlugin` and a scripted city,
//! and check sampling, registry startup and selection persistence end to end.

mod sampling_tests;
mod selection_tests;
