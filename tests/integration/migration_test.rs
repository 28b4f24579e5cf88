//! End-to-end migration tests
//!
//! Drive the real HTTP clients against wiremock stand-ins for the Synapse
//! development endpoint and the Fabric items API.

#![allow(dead_code)]

mod common;
mod export;
mod import;
mod migrate;
