pub mod config;
pub mod controller;
pub mod domain;
pub mod mail;
pub mod routes;
pub mod run;
pub mod startup;
pub mod telemetry;
pub mod utils;
