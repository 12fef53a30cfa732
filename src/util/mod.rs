//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Display-only formatting lives here so components stay thin and the rules
//! can be tested without a browser.

pub mod currency;
