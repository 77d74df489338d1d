pub mod config;
pub mod controllers;
pub mod data;
pub mod decorators;
pub mod domain;
pub mod error;
pub mod factories;
pub mod http;
pub mod infra;
pub mod middleware;
pub mod routes;
pub mod validation;

#[cfg(test)]
pub mod testing;
