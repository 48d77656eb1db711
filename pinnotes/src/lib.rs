pub mod config;
pub mod data;
pub mod store;
pub mod util;
mod lib_constants;
pub mod rng;
pub mod bin_constants;
pub mod logging;
pub mod id_generator;
pub mod seed;
