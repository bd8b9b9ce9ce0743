pub mod configuration;
pub mod demo;
pub mod domain;
pub mod record_store_client;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
pub mod widget;
