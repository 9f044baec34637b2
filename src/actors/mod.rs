pub mod accountant;
pub mod experiment;
