//! Storage layer (in-memory).

pub mod activities;

pub use activities::ActivityStore;
