pub mod configuration;
pub mod constant;
pub mod domain;
pub mod error;
pub mod notification_client;
pub mod request;
pub mod routes;
pub mod signup_form;
pub mod startup;
pub mod submission_store;
pub mod telemetry;
pub mod util;
pub mod utils;
