//! A marketplace smart contract for fixed price NFT sales.
//!
//! # Description
//! Owners of CIS2 NFTs can list a token for sale at a price in CCD, change
//! the price of an active listing and cancel it again. Any account can buy a
//! listed token by attaching at least the asked price. The marketplace never
//! takes custody of tokens: the seller keeps the token in the collection
//! contract and approves this contract as an operator, and the token is
//! transferred directly from seller to buyer on purchase.
//!
//! Sale proceeds are not paid out during the purchase. They accumulate in a
//! per seller ledger inside the contract and are paid out when the seller
//! calls the `withdrawProceeds` entrypoint.
//!
//! Every listing is identified by the pair of collection contract address and
//! token ID, so one instance of this contract can serve any number of
//! collections.

#![cfg_attr(not(feature = "std"), no_std)]

mod contract;
mod events;
mod external;
mod state;
