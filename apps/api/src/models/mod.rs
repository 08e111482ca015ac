pub mod employee;
pub mod prediction;
