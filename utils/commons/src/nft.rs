use concordium_cis2::{
    AdditionalData, OperatorOfQuery, OperatorOfQueryParams, OperatorOfQueryResponse, Receiver,
    Transfer, TransferParams,
};
use concordium_std::*;

use crate::{ContractReadError, ContractTokenAmount, Token};

/// Host extension for calls into the collection contract that holds a
/// listed token. Collections expose the CIS-2 `operatorOf` and `transfer`
/// entrypoints plus an `ownerOf` view returning the address owning a token.
pub trait HostNftExt<S>: HasHost<S> {
    /// Query the current owner of a token.
    fn nft_owner_of(
        &self,
        token: &Token,
    ) -> Result<Address, ContractReadError<Self::ReturnValueType>> {
        let mut result = self
            .invoke_contract_read_only(
                &token.contract,
                &token.id,
                EntrypointName::new_unchecked("ownerOf"),
                Amount::zero(),
            )
            .map_err(ContractReadError::Call)?
            .ok_or(ContractReadError::Compatibility)?;

        Address::deserial(&mut result).map_err(|_| ContractReadError::Parse)
    }

    /// Check whether `address` is an operator of `owner` on the collection
    /// holding `token`.
    fn nft_is_operator(
        &self,
        token: &Token,
        owner: Address,
        address: Address,
    ) -> Result<bool, ContractReadError<Self::ReturnValueType>> {
        let params = OperatorOfQueryParams {
            queries: vec![OperatorOfQuery { owner, address }],
        };

        let mut result = self
            .invoke_contract_read_only(
                &token.contract,
                &params,
                EntrypointName::new_unchecked("operatorOf"),
                Amount::zero(),
            )
            .map_err(ContractReadError::Call)?
            .ok_or(ContractReadError::Compatibility)?;

        let OperatorOfQueryResponse(results) =
            OperatorOfQueryResponse::deserial(&mut result).map_err(|_| ContractReadError::Parse)?;

        results.first().copied().ok_or(ContractReadError::Parse)
    }

    /// Instruct the collection contract to move a token between accounts.
    /// The collection authorizes the caller, so this contract must be an
    /// operator of `from`.
    fn nft_transfer(
        &mut self,
        token: &Token,
        from: AccountAddress,
        to: AccountAddress,
    ) -> Result<(), CallContractError<Self::ReturnValueType>> {
        let transfer = Transfer {
            token_id: token.id,
            amount: ContractTokenAmount::from(1),
            from: Address::Account(from),
            to: Receiver::Account(to),
            data: AdditionalData::empty(),
        };

        self.invoke_contract(
            &token.contract,
            &TransferParams::from(vec![transfer]),
            EntrypointName::new_unchecked("transfer"),
            Amount::zero(),
        )?;

        Ok(())
    }
}

impl<S, H: HasHost<S>> HostNftExt<S> for H {}
