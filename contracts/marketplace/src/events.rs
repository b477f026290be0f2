use commons::{Token, ITEM_CANCELED_TAG, ITEM_LISTED_TAG, NFT_BOUGHT_TAG};
use concordium_std::*;

/// An untagged event of a token being offered for sale. Logged when a token
/// is listed and again whenever the price of an active listing changes.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct ItemListedEvent {
    /// Sequence number of this event, unique within the contract instance.
    pub seq: u64,
    /// Account that signed the transaction producing this event.
    pub origin: AccountAddress,
    /// The token being offered for sale.
    pub token: Token,
    /// The address selling the token.
    pub seller: AccountAddress,
    /// The asked price.
    pub price: Amount,
}

/// An untagged event of a listing being withdrawn by its seller.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct ItemCanceledEvent {
    /// Sequence number of this event, unique within the contract instance.
    pub seq: u64,
    /// Account that signed the transaction producing this event.
    pub origin: AccountAddress,
    /// The token that is no longer for sale.
    pub token: Token,
    /// The address that had listed the token.
    pub seller: AccountAddress,
}

/// An untagged event of a completed purchase.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct NftBoughtEvent {
    /// Sequence number of this event, unique within the contract instance.
    pub seq: u64,
    /// Account that signed the transaction producing this event.
    pub origin: AccountAddress,
    /// The token that was sold.
    pub token: Token,
    /// The address that bought the token.
    pub buyer: AccountAddress,
    /// The price the token was sold at.
    pub price: Amount,
}

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum MarketEvent {
    /// Listing a token or updating the price of a listing.
    ItemListed(ItemListedEvent),
    /// Cancelling a listing.
    ItemCanceled(ItemCanceledEvent),
    /// Buying a listed token.
    NftBought(NftBoughtEvent),
}

impl Serial for MarketEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            MarketEvent::ItemListed(event) => {
                out.write_u8(ITEM_LISTED_TAG)?;
                event.serial(out)
            }
            MarketEvent::ItemCanceled(event) => {
                out.write_u8(ITEM_CANCELED_TAG)?;
                event.serial(out)
            }
            MarketEvent::NftBought(event) => {
                out.write_u8(NFT_BOUGHT_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for MarketEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            ITEM_LISTED_TAG => ItemListedEvent::deserial(source).map(MarketEvent::ItemListed),
            ITEM_CANCELED_TAG => {
                ItemCanceledEvent::deserial(source).map(MarketEvent::ItemCanceled)
            }
            NFT_BOUGHT_TAG => NftBoughtEvent::deserial(source).map(MarketEvent::NftBought),
            _ => Err(ParseError::default()),
        }
    }
}
