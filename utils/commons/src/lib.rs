//! It exposes all common structs and types.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{constants::*, errors::*, nft::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

#[cfg(feature = "std")]
pub mod test;

mod constants;
mod errors;
mod nft;
mod types;
