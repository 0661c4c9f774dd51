//! Translation gateway port.

pub mod translator;
