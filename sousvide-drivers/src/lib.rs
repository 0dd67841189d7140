//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in sousvide-core for the controller's hardware:
//!
//! - Heater switching through an RF remote-controlled outlet
//! - DS18B20 water probe over a 1-Wire bus
//! - Five-button resistor ladder panel

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod heater;
pub mod input;
pub mod sensor;
