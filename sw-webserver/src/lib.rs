#[macro_use]
extern crate log;

mod core;
mod web;

pub use web::{run, Cfg, Store};
