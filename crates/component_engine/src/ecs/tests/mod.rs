//! Entity scenario tests

mod factories;
mod observer_wiring;
mod support;
