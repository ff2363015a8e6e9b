//! Integration tests for control availability and resolution

mod activation;
mod cli_routes;
mod resolution_scenarios;
mod test_utils;
