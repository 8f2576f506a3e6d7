pub mod food;
pub mod form;
