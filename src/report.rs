pub mod console;
pub mod json;
pub mod report_model;
