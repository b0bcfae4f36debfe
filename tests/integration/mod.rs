//! Integration tests for the frame tracker

mod config_integration;
mod export_integration;
mod frame_store;
mod store_persistence;
