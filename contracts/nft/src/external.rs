use commons::ContractTokenId;
use concordium_cis2::TokenMetadataQueryParams;

/// Parameter type for the CIS2 function `tokenMetadata` specialized to the
/// token IDs used by this contract.
pub type ContractTokenMetadataQueryParams = TokenMetadataQueryParams<ContractTokenId>;
