// Each integration-test binary compiles this module on its own, so fixtures
// used by only one binary look dead in the others.
#![allow(dead_code)]

pub mod synthetic_cloud;
