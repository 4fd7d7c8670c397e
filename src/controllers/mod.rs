pub mod cli;
pub mod interactive;
pub mod ports;
pub mod session;
