pub mod bot;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod quiz;

#[cfg(test)]
pub mod testing;
