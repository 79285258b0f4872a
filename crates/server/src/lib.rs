pub mod errors;
pub mod routes;
pub mod startup;
pub mod state;
pub mod views;

pub use startup::run;
