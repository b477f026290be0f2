use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Caller does not own the token (Error code: -4).
    NotOwner,
    /// Marketplace is not an operator of the token owner (Error code: -5).
    NotApprovedForMarketplace,
    /// Token is already listed for sale (Error code: -6).
    AlreadyListed,
    /// Token is not listed for sale (Error code: -7).
    NotListed,
    /// Listing price must be above zero (Error code: -8).
    PriceMustBeAboveZero,
    /// Attached amount is below the listed price (Error code: -9).
    PriceNotMet,
    /// No proceeds to withdraw (Error code: -10).
    NoProceeds,
    /// Only account addresses can use the marketplace (Error code: -11).
    OnlyAccountAddress,
    /// Failed to invoke a contract (Error code: -12).
    InvokeContractError,
    /// Failed to invoke a transfer (Error code: -13).
    InvokeTransferError,
    /// Incompatible collection contract (Error code: -14).
    Incompatible,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}

/// Mapping errors related to CCD transfers to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}

/// Mapping CustomContractError to ContractError.
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}

/// Errors of a read-only call into another contract.
#[derive(Debug)]
pub enum ContractReadError<R> {
    /// The call itself failed.
    Call(CallContractError<R>),
    /// The contract did not return a value.
    Compatibility,
    /// The returned value could not be parsed.
    Parse,
}
