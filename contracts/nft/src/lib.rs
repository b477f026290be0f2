//! A minimal CIS2 NFT collection used as the reference asset registry for
//! the marketplace contract.
//!
//! # Description
//! Anyone can mint: each call to `mint` assigns the next sequential token ID
//! to the sender. All tokens share one hard coded metadata URL, so the
//! collection needs no per token configuration. Tokens move between
//! addresses with the CIS2 `transfer` entrypoint, authorized by ownership or
//! by the CIS2 operator mechanism.
//!
//! Next to the standard CIS2 queries the contract exposes the `ownerOf` view
//! the marketplace consumes, and a `getTokenCounter` view with the number of
//! minted tokens.

#![cfg_attr(not(feature = "std"), no_std)]

mod contract;
mod external;
mod state;
