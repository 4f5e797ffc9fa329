//! Helpers shared by controllers for turning raw request parameters into typed values.

pub mod date;
