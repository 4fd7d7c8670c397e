pub mod controller;
pub mod errors;
pub mod history;
