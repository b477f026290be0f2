use commons::Token;
use concordium_std::*;

/// Parameter of the `listItem` and `updateListing` entrypoints.
#[derive(Debug, Serialize, SchemaType)]
pub struct ListParams {
    /// Token to offer for sale.
    pub token: Token,
    /// Asked price in CCD.
    pub price: Amount,
}
