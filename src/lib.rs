pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod models;
pub mod services;
pub mod stores;

#[cfg(test)]
pub mod test_utils;
