pub mod form_spec;
pub mod responses;
