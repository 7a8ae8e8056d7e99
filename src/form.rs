pub mod engine;
pub mod error;
pub mod field_model;
pub mod identity;
pub mod observer;
pub mod response;
pub mod validation;
