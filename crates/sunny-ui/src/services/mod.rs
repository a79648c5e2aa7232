pub mod load_service;

pub use load_service::{request_load, request_refresh, LoadServiceMessage};
