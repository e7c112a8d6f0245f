//! HTTP 接口层

pub mod dto;
mod routes;

pub use routes::{BASE_PATH, inventory_path, order_path, routes};
