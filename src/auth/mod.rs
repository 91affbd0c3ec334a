pub mod endpoints;
pub mod service;
pub mod session;
pub mod storage;
