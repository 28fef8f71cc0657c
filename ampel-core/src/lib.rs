//! Board-agnostic signal logic for the Ampel traffic-light firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Signal data model (phase, mode, published snapshot)
//! - The phase cycle state machine the scheduler task drives
//! - Button debouncing
//! - Per-device pattern state machines (LED, buzzer, matrix, display)
//! - LED-matrix frame data and wiring-order mapping
//! - Timing and brightness configuration

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod cycle;
pub mod debounce;
pub mod frames;
pub mod render;
pub mod signal;
