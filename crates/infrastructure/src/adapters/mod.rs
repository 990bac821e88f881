//! Infrastructure adapters

mod reqwest_auth_service;

pub use reqwest_auth_service::ReqwestAuthService;
