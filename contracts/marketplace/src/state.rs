use commons::{Token, NULL_ACCOUNT};
use concordium_std::*;

/// An active sale offer for a single token.
#[derive(Debug, Serialize, SchemaType, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    /// Account that listed the token and is credited on a sale.
    pub seller: AccountAddress,
    /// Asked price in CCD. Stored listings always have a price above zero.
    pub price: Amount,
}

impl Listing {
    /// The listing reported for tokens that are not listed: a zero price
    /// and the all zero account as seller.
    pub fn sentinel() -> Self {
        Self {
            seller: NULL_ACCOUNT,
            price: Amount::zero(),
        }
    }
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Active listings, keyed by collection contract and token ID.
    pub listings: StateMap<Token, Listing, S>,
    /// CCD owed to each seller from completed sales.
    pub proceeds: StateMap<AccountAddress, Amount, S>,
    /// Sequence number assigned to the next logged event.
    pub event_seq: u64,
}

// Functions for creating and updating the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates a new state with no listings and no proceeds.
    pub fn empty(state_builder: &mut StateBuilder<S>) -> Self {
        Self {
            listings: state_builder.new_map(),
            proceeds: state_builder.new_map(),
            event_seq: 0,
        }
    }

    /// Look up the active listing for a token.
    pub fn listing(&self, token: &Token) -> Option<Listing> {
        self.listings.get(token).map(|listing| *listing)
    }

    /// Add or replace the listing for a token.
    pub fn put_listing(&mut self, token: Token, listing: Listing) {
        self.listings.insert(token, listing);
    }

    /// Remove the listing for a token, returning it if there was one.
    pub fn remove_listing(&mut self, token: &Token) -> Option<Listing> {
        self.listings.remove_and_get(token)
    }

    /// Funds owed to a seller. Accounts without completed sales owe zero.
    pub fn proceeds(&self, seller: &AccountAddress) -> Amount {
        self.proceeds
            .get(seller)
            .map(|amount| *amount)
            .unwrap_or_else(Amount::zero)
    }

    /// Credit the sale price of a completed purchase to a seller. Crediting
    /// zero leaves the ledger untouched.
    pub fn credit_proceeds(&mut self, seller: AccountAddress, amount: Amount) {
        if amount == Amount::zero() {
            return;
        }

        let mut balance = self.proceeds.entry(seller).or_insert(Amount::zero());
        *balance += amount;
    }

    /// Zero the balance of a seller, returning the previous value.
    pub fn take_proceeds(&mut self, seller: &AccountAddress) -> Amount {
        self.proceeds
            .remove_and_get(seller)
            .unwrap_or_else(Amount::zero)
    }

    /// Sequence number for the next logged event. Each call advances the
    /// counter by one.
    pub fn next_event_seq(&mut self) -> u64 {
        let seq = self.event_seq;
        self.event_seq += 1;
        seq
    }
}
