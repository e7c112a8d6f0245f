//! coffee-maker Service - 库存与订单 HTTP 接口

pub mod api;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
