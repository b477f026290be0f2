use commons::{ContractError, ContractResult, ContractTokenAmount, ContractTokenId};
use concordium_cis2::TokenIdU64;
use concordium_std::*;
use core::ops::DerefMut;

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Number of minted tokens. The next minted token gets this ID.
    pub token_counter: u64,
    /// Owner of each minted token.
    pub tokens: StateMap<ContractTokenId, Address, S>,
    /// Operators for each address.
    pub operators: StateMap<Address, StateSet<Address, S>, S>,
}

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates an empty state with no tokens.
    pub fn empty(state_builder: &mut StateBuilder<S>) -> Self {
        Self {
            token_counter: 0,
            tokens: state_builder.new_map(),
            operators: state_builder.new_map(),
        }
    }

    /// Mint the next token to the given owner. Returns the ID of the minted
    /// token.
    pub fn mint_next(&mut self, owner: Address) -> ContractTokenId {
        let token_id = TokenIdU64(self.token_counter);
        self.tokens.insert(token_id, owner);
        self.token_counter += 1;

        token_id
    }

    /// Check that the token ID currently exists in this contract.
    #[inline(always)]
    pub fn contains_token(&self, token_id: &ContractTokenId) -> bool {
        self.tokens.get(token_id).is_some()
    }

    /// Get the owner of a token. Results in an error if the token ID does
    /// not exist in the state.
    pub fn owner_of(&self, token_id: &ContractTokenId) -> ContractResult<Address> {
        self.tokens
            .get(token_id)
            .map(|owner| *owner)
            .ok_or(ContractError::InvalidTokenId)
    }

    /// Get the current balance of a given token ID for a given address.
    /// Results in an error if the token ID does not exist in the state.
    pub fn balance(
        &self,
        token_id: &ContractTokenId,
        address: &Address,
    ) -> ContractResult<ContractTokenAmount> {
        let owner = self.owner_of(token_id)?;

        Ok(if owner == *address { 1.into() } else { 0.into() })
    }

    /// Update the state with a transfer of some token.
    /// Results in an error if the token ID does not exist in the state or if
    /// the from address does not currently own the token.
    pub fn transfer(
        &mut self,
        token_id: &ContractTokenId,
        amount: ContractTokenAmount,
        from: &Address,
        to: &Address,
    ) -> ContractResult<()> {
        let owner = self.owner_of(token_id)?;

        // A zero transfer does not modify the state.
        if amount == 0.into() {
            return Ok(());
        }

        // Every token is unique, so any other amount must come from its
        // owner and can only be 1.
        ensure!(amount == 1.into(), ContractError::InsufficientFunds);
        ensure!(owner == *from, ContractError::InsufficientFunds);

        self.tokens.insert(*token_id, *to);
        Ok(())
    }

    /// Add a new operator for the given address.
    /// Succeeds even if the `operator` already is an operator for the
    /// `owner`.
    pub fn add_operator(
        &mut self,
        owner: &Address,
        operator: &Address,
        state_builder: &mut StateBuilder<S>,
    ) {
        self.operators
            .entry(*owner)
            .or_insert_with(|| state_builder.new_set())
            .deref_mut()
            .insert(*operator);
    }

    /// Update the state removing an operator for a given address.
    /// Succeeds even if the `operator` is _not_ an operator for the `owner`.
    pub fn remove_operator(&mut self, owner: &Address, operator: &Address) {
        self.operators
            .get_mut(owner)
            .map(|mut operators| operators.remove(operator));
    }

    /// Check if a given address is an operator of a given owner address.
    pub fn is_operator(&self, owner: &Address, address: &Address) -> bool {
        self.operators
            .get(owner)
            .map(|operators| operators.contains(address))
            .unwrap_or(false)
    }
}
