//! cb-protocol: Shared data types for the country browser.
//!
//! This crate defines the country record used by the loader, the browser
//! view-model, and the renderers, plus the restcountries wire format it is
//! decoded from.

pub mod country;
pub mod wire;

pub use country::CountryRecord;
pub use wire::{decode_dataset, RawCountry};
