//! Terminal multiple-choice quiz: fetches questions over HTTP and plays
//! them through a reducer-driven state machine.

pub mod config;
pub mod mvi;
pub mod quiz;
pub mod source;
pub mod ui;
