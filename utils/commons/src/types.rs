use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Contract token ID type. Collections allocate sequential 64-bit ids, so
/// the fixed-width integer token ID is used instead of the generic byte
/// string.
pub type ContractTokenId = TokenIdU64;

/// Contract token amount type. Token ids are non-fungible, so amounts are
/// only ever 0 or 1.
pub type ContractTokenAmount = TokenAmountU64;

/// Wrapping the custom errors in a type with CIS-2 errors.
pub type ContractError = Cis2Error<CustomContractError>;

pub type TransferParameter = TransferParams<ContractTokenId, ContractTokenAmount>;

/// Parameter type for the CIS-2 function `balanceOf` specialized to the subset
/// of TokenIDs used by this contract.
pub type ContractBalanceOfQueryParams = BalanceOfQueryParams<ContractTokenId>;

/// Response type for the CIS-2 function `balanceOf` specialized to the subset
/// of TokenAmounts used by this contract.
pub type ContractBalanceOfQueryResponse = BalanceOfQueryResponse<ContractTokenAmount>;

/// A token inside a collection contract. Identifies one listable asset
/// across all collections.
#[derive(Debug, Serialize, SchemaType, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Collection contract address.
    pub contract: ContractAddress,
    /// Token identifier inside the collection.
    pub id: ContractTokenId,
}
