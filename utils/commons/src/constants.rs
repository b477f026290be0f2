use concordium_std::AccountAddress;

/// Tag of the listing event. Emitted both for new listings and for price
/// updates of existing listings.
pub const ITEM_LISTED_TAG: u8 = u8::MAX - 5;

/// Tag of the listing cancellation event.
pub const ITEM_CANCELED_TAG: u8 = u8::MAX - 6;

/// Tag of the purchase event.
pub const NFT_BOUGHT_TAG: u8 = u8::MAX - 7;

/// Account of the sentinel listing returned for tokens that are not listed.
/// No keys exist for this address, so it can never be a real seller.
pub const NULL_ACCOUNT: AccountAddress = AccountAddress([0u8; 32]);
