#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod muscle_groups;
pub mod pdf;
pub mod rest;
pub mod xlsx;
