use crate::external::ContractTokenMetadataQueryParams;
use crate::state::State;
use commons::{
    ContractBalanceOfQueryParams, ContractBalanceOfQueryResponse, ContractError, ContractResult,
    ContractTokenAmount, ContractTokenId, TransferParameter,
};
use concordium_cis2::{
    Cis2Event, MetadataUrl, MintEvent, OnReceivingCis2Params, OperatorOfQueryParams,
    OperatorOfQueryResponse, OperatorUpdate, Receiver, TokenMetadataEvent,
    TokenMetadataQueryResponse, TransferEvent, TransferParams, UpdateOperatorEvent,
    UpdateOperatorParams,
};
use concordium_std::*;

/// The metadata URL shared by every token of the collection. The collection
/// represents a single artwork, so all token IDs resolve to the same
/// metadata.
const TOKEN_METADATA_URL: &str =
    "ipfs://bafybeig37ioir76s7mg5oobetncojcm3c3hxasyd4rvid4jqhy4gkaheg4/?filename=0-PUG.json";

/// Initialize contract instance with no tokens.
#[init(contract = "BasicNft")]
fn init<S: HasStateApi>(
    _ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    Ok(State::empty(state_builder))
}

/// Mint one token to the sender. Token IDs are sequential: the first minted
/// token has ID 0. Logs a `Mint` and a `TokenMetadata` event and returns the
/// ID of the minted token.
///
/// It rejects if:
/// - Fails to log Mint event;
/// - Fails to log TokenMetadata event.
#[receive(
    contract = "BasicNft",
    name = "mint",
    mutable,
    enable_logger,
    return_value = "ContractTokenId"
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<ContractTokenId> {
    let owner = ctx.sender();

    let token_id = host.state_mut().mint_next(owner);

    // Event for minted NFT.
    logger.log(&Cis2Event::Mint(MintEvent {
        token_id,
        amount: ContractTokenAmount::from(1),
        owner,
    }))?;

    // Metadata URL for the NFT.
    logger.log(&token_metadata_event(token_id))?;

    Ok(token_id)
}

/// Execute a list of token transfers, in the order of the list.
///
/// Logs a `Transfer` event for each transfer in the list and invokes the
/// receive hook function on every transfer to a contract address.
///
/// It rejects if:
/// - It fails to parse the parameter;
/// - Any of the transfers fail to be executed, which could be if:
///     - The `token_id` does not exist;
///     - The sender is neither the `from` address nor an operator of it;
///     - The token is not owned by the `from` address;
/// - Fails to log event;
/// - Any of the receive hook functions rejects.
#[receive(
    contract = "BasicNft",
    name = "transfer",
    parameter = "TransferParameter",
    mutable,
    enable_logger
)]
fn transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let TransferParams(transfers): TransferParameter = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    for transfer in transfers {
        let state = host.state_mut();
        // Authenticate the sender for this transfer.
        ensure!(
            transfer.from == sender || state.is_operator(&transfer.from, &sender),
            ContractError::Unauthorized
        );

        let to_address = transfer.to.address();
        // Update the contract state.
        state.transfer(&transfer.token_id, transfer.amount, &transfer.from, &to_address)?;

        // Log transfer event.
        logger.log(&Cis2Event::Transfer(TransferEvent {
            token_id: transfer.token_id,
            amount: transfer.amount,
            from: transfer.from,
            to: to_address,
        }))?;

        // If the receiver is a contract, invoke its receive hook function.
        if let Receiver::Contract(address, entrypoint_name) = transfer.to {
            let parameter = OnReceivingCis2Params {
                token_id: transfer.token_id,
                amount: transfer.amount,
                from: transfer.from,
                data: transfer.data,
            };

            host.invoke_contract(
                &address,
                &parameter,
                entrypoint_name.as_entrypoint_name(),
                Amount::zero(),
            )?;
        }
    }

    Ok(())
}

/// Enable or disable addresses as operators of the sender address.
/// Logs an `UpdateOperator` event for each update.
///
/// It rejects if:
/// - It fails to parse the parameter;
/// - Fails to log event.
#[receive(
    contract = "BasicNft",
    name = "updateOperator",
    parameter = "UpdateOperatorParams",
    mutable,
    enable_logger
)]
fn update_operator<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let UpdateOperatorParams(params) = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    let (state, state_builder) = host.state_and_builder();
    for param in params {
        // Update the operator in the state.
        match param.update {
            OperatorUpdate::Add => state.add_operator(&sender, &param.operator, state_builder),
            OperatorUpdate::Remove => state.remove_operator(&sender, &param.operator),
        }

        // Log the appropriate event.
        logger.log(
            &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                UpdateOperatorEvent {
                    owner: sender,
                    operator: param.operator,
                    update: param.update,
                },
            ),
        )?;
    }

    Ok(())
}

/// Takes a list of queries. Each query is an owner address and some address
/// to check as an operator of the owner address.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "BasicNft",
    name = "operatorOf",
    parameter = "OperatorOfQueryParams",
    return_value = "OperatorOfQueryResponse"
)]
fn operator_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<OperatorOfQueryResponse> {
    // Parse the parameter.
    let params: OperatorOfQueryParams = ctx.parameter_cursor().get()?;
    // Build the response.
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();
    for query in params.queries {
        // Query the state for address being an operator of owner.
        let is_operator = state.is_operator(&query.owner, &query.address);
        response.push(is_operator);
    }

    Ok(OperatorOfQueryResponse::from(response))
}

/// Get the balance of given token IDs and addresses. Balances are 1 for the
/// owner of each token and 0 for everyone else.
///
/// It rejects if:
/// - It fails to parse the parameter;
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "BasicNft",
    name = "balanceOf",
    parameter = "ContractBalanceOfQueryParams",
    return_value = "ContractBalanceOfQueryResponse"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractBalanceOfQueryResponse> {
    // Parse the parameter.
    let params: ContractBalanceOfQueryParams = ctx.parameter_cursor().get()?;
    // Build the response.
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();
    for query in params.queries {
        // Query the state for balance.
        let amount = state.balance(&query.token_id, &query.address)?;
        response.push(amount);
    }

    Ok(ContractBalanceOfQueryResponse::from(response))
}

/// Get the metadata URLs of given token IDs.
///
/// It rejects if:
/// - It fails to parse the parameter;
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "BasicNft",
    name = "tokenMetadata",
    parameter = "ContractTokenMetadataQueryParams",
    return_value = "TokenMetadataQueryResponse"
)]
fn token_metadata<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenMetadataQueryResponse> {
    // Parse the parameter.
    let params: ContractTokenMetadataQueryParams = ctx.parameter_cursor().get()?;
    // Build the response.
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();
    for token_id in params.queries {
        ensure!(
            state.contains_token(&token_id),
            ContractError::InvalidTokenId
        );
        response.push(token_metadata_url());
    }

    Ok(TokenMetadataQueryResponse::from(response))
}

/// Get the owner of a token. This is the view the marketplace contract
/// queries before listing a token.
///
/// It rejects if:
/// - It fails to parse the parameter;
/// - The queried `token_id` does not exist.
#[receive(
    contract = "BasicNft",
    name = "ownerOf",
    parameter = "ContractTokenId",
    return_value = "Address"
)]
fn owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    // Parse the parameter.
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;

    host.state().owner_of(&token_id)
}

/// Get the number of minted tokens.
#[receive(contract = "BasicNft", name = "getTokenCounter", return_value = "u64")]
fn get_token_counter<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    Ok(host.state().token_counter)
}

fn token_metadata_url() -> MetadataUrl {
    MetadataUrl {
        url: String::from(TOKEN_METADATA_URL),
        hash: None,
    }
}

fn token_metadata_event(
    token_id: ContractTokenId,
) -> Cis2Event<ContractTokenId, ContractTokenAmount> {
    Cis2Event::TokenMetadata(TokenMetadataEvent {
        token_id,
        metadata_url: token_metadata_url(),
    })
}

#[concordium_cfg_test]
mod tests {
    use commons::test::*;
    use concordium_cis2::{
        AdditionalData, BalanceOfQuery, OperatorOfQuery, TokenIdU64, Transfer, UpdateOperator,
    };
    use concordium_std::*;
    use test_infrastructure::*;

    use super::*;

    const OWNER: AccountAddress = AccountAddress([1; 32]);
    const RECEIVER: AccountAddress = AccountAddress([2; 32]);
    const OPERATOR: AccountAddress = AccountAddress([3; 32]);

    const HOOK_TARGET: ContractAddress = ContractAddress {
        index: 9,
        subindex: 0,
    };

    fn new_host() -> TestHost<State<TestStateApi>> {
        let ctx = TestInitContext::empty();
        let mut state_builder = TestStateBuilder::new();

        let state = init(&ctx, &mut state_builder).expect_report("Failed during init_BasicNft");

        TestHost::new(state, state_builder)
    }

    /// Host with token 0 minted to `OWNER`.
    fn minted_host() -> TestHost<State<TestStateApi>> {
        let mut host = new_host();

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OWNER));
        let mut logger = TestLogger::init();

        let token_id = mint(&ctx, &mut host, &mut logger).expect_report("Failed to mint");
        claim_eq!(token_id, TokenIdU64(0));

        host
    }

    fn transfer_params(
        token_id: ContractTokenId,
        from: Address,
        to: Receiver,
    ) -> TransferParameter {
        TransferParams::from(vec![Transfer {
            token_id,
            amount: ContractTokenAmount::from(1),
            from,
            to,
            data: AdditionalData::empty(),
        }])
    }

    #[concordium_test]
    fn test_init() {
        let host = new_host();

        claim_eq!(host.state().token_counter, 0);
        claim!(!host.state().contains_token(&TokenIdU64(0)));
    }

    #[concordium_test]
    fn test_mint() {
        let mut host = new_host();

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OWNER));
        let mut logger = TestLogger::init();

        let token_id = mint(&ctx, &mut host, &mut logger).expect_report("Failed to mint");
        claim_eq!(token_id, TokenIdU64(0));

        claim_eq!(
            host.state().owner_of(&token_id),
            Ok(Address::Account(OWNER))
        );
        claim_eq!(host.state().token_counter, 1);
        claim_eq!(logger.logs.len(), 2);
        claim_eq!(
            logger.logs[0],
            to_bytes(&Cis2Event::Mint(MintEvent {
                token_id: TokenIdU64(0),
                amount: ContractTokenAmount::from(1),
                owner: Address::Account(OWNER),
            }))
        );
        claim_eq!(logger.logs[1], to_bytes(&token_metadata_event(token_id)));

        // The next mint gets the next sequential ID.
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(RECEIVER));
        let mut logger = TestLogger::init();

        let token_id = mint(&ctx, &mut host, &mut logger).expect_report("Failed to mint");
        claim_eq!(token_id, TokenIdU64(1));
        claim_eq!(
            host.state().owner_of(&token_id),
            Ok(Address::Account(RECEIVER))
        );
        claim_eq!(host.state().token_counter, 2);
    }

    #[concordium_test]
    fn test_transfer() {
        let mut host = minted_host();

        let params = transfer_params(
            TokenIdU64(0),
            Address::Account(OWNER),
            Receiver::Account(RECEIVER),
        );
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OWNER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        claim_eq!(
            host.state().owner_of(&TokenIdU64(0)),
            Ok(Address::Account(RECEIVER))
        );
        claim_eq!(logger.logs.len(), 1);
        claim_eq!(
            logger.logs[0],
            to_bytes(&Cis2Event::Transfer(TransferEvent {
                token_id: TokenIdU64(0),
                amount: ContractTokenAmount::from(1),
                from: Address::Account(OWNER),
                to: Address::Account(RECEIVER),
            }))
        );
    }

    #[concordium_test]
    fn test_transfer_rejects_unauthorized() {
        let mut host = minted_host();

        let params = transfer_params(
            TokenIdU64(0),
            Address::Account(OWNER),
            Receiver::Account(RECEIVER),
        );
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(RECEIVER))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(ContractError::Unauthorized));

        claim_eq!(
            host.state().owner_of(&TokenIdU64(0)),
            Ok(Address::Account(OWNER))
        );
    }

    #[concordium_test]
    fn test_transfer_rejects_not_owned() {
        let mut host = minted_host();

        // RECEIVER sends from its own address, but OWNER owns the token.
        let params = transfer_params(
            TokenIdU64(0),
            Address::Account(RECEIVER),
            Receiver::Account(OPERATOR),
        );
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(RECEIVER))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(ContractError::InsufficientFunds));
    }

    #[concordium_test]
    fn test_transfer_rejects_unknown_token() {
        let mut host = minted_host();

        let params = transfer_params(
            TokenIdU64(9),
            Address::Account(OWNER),
            Receiver::Account(RECEIVER),
        );
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OWNER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(ContractError::InvalidTokenId));
    }

    #[concordium_test]
    fn test_transfer_zero_amount() {
        let mut host = minted_host();

        let params = TransferParams::from(vec![Transfer {
            token_id: TokenIdU64(0),
            amount: ContractTokenAmount::from(0),
            from: Address::Account(OWNER),
            to: Receiver::Account(RECEIVER),
            data: AdditionalData::empty(),
        }]);
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OWNER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        // The owner keeps the token, but the transfer is still logged.
        claim_eq!(
            host.state().owner_of(&TokenIdU64(0)),
            Ok(Address::Account(OWNER))
        );
        claim_eq!(logger.logs.len(), 1);
    }

    #[concordium_test]
    fn test_operator_can_transfer() {
        let mut host = minted_host();

        let params = UpdateOperatorParams(vec![UpdateOperator {
            update: OperatorUpdate::Add,
            operator: Address::Account(OPERATOR),
        }]);
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OWNER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_operator(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));
        claim_eq!(logger.logs.len(), 1);
        claim_eq!(
            logger.logs[0],
            to_bytes(
                &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                    UpdateOperatorEvent {
                        owner: Address::Account(OWNER),
                        operator: Address::Account(OPERATOR),
                        update: OperatorUpdate::Add,
                    }
                )
            )
        );

        let params = transfer_params(
            TokenIdU64(0),
            Address::Account(OWNER),
            Receiver::Account(RECEIVER),
        );
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OPERATOR))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));
        claim_eq!(
            host.state().owner_of(&TokenIdU64(0)),
            Ok(Address::Account(RECEIVER))
        );
    }

    #[concordium_test]
    fn test_update_operator() {
        let mut host = new_host();

        let params = UpdateOperatorParams(vec![UpdateOperator {
            update: OperatorUpdate::Add,
            operator: Address::Account(OPERATOR),
        }]);
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OWNER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        claim_eq!(update_operator(&ctx, &mut host, &mut logger), Ok(()));

        let query = OperatorOfQueryParams {
            queries: vec![OperatorOfQuery {
                owner: Address::Account(OWNER),
                address: Address::Account(OPERATOR),
            }],
        };
        let bytes = to_bytes(&query);
        let mut view_ctx = TestReceiveContext::empty();
        view_ctx.set_parameter(&bytes);
        let OperatorOfQueryResponse(is_operator) =
            operator_of(&view_ctx, &host).expect_report("Failed to call operatorOf");
        claim_eq!(is_operator, vec![true]);

        let params = UpdateOperatorParams(vec![UpdateOperator {
            update: OperatorUpdate::Remove,
            operator: Address::Account(OPERATOR),
        }]);
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OWNER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        claim_eq!(update_operator(&ctx, &mut host, &mut logger), Ok(()));

        let bytes = to_bytes(&query);
        let mut view_ctx = TestReceiveContext::empty();
        view_ctx.set_parameter(&bytes);
        let OperatorOfQueryResponse(is_operator) =
            operator_of(&view_ctx, &host).expect_report("Failed to call operatorOf");
        claim_eq!(is_operator, vec![false]);
    }

    #[concordium_test]
    fn test_balance_of() {
        let host = minted_host();

        let params = ContractBalanceOfQueryParams {
            queries: vec![
                BalanceOfQuery {
                    token_id: TokenIdU64(0),
                    address: Address::Account(OWNER),
                },
                BalanceOfQuery {
                    token_id: TokenIdU64(0),
                    address: Address::Account(RECEIVER),
                },
            ],
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);

        let ContractBalanceOfQueryResponse(amounts) =
            balance_of(&ctx, &host).expect_report("Failed to call balanceOf");
        claim_eq!(
            amounts,
            vec![ContractTokenAmount::from(1), ContractTokenAmount::from(0)]
        );

        // Queries for unminted tokens fail.
        let params = ContractBalanceOfQueryParams {
            queries: vec![BalanceOfQuery {
                token_id: TokenIdU64(9),
                address: Address::Account(OWNER),
            }],
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);

        let result = balance_of(&ctx, &host);
        claim_eq!(result, Err(ContractError::InvalidTokenId));
    }

    #[concordium_test]
    fn test_token_metadata() {
        let host = minted_host();

        let params = ContractTokenMetadataQueryParams {
            queries: vec![TokenIdU64(0)],
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);

        let TokenMetadataQueryResponse(urls) =
            token_metadata(&ctx, &host).expect_report("Failed to call tokenMetadata");
        claim_eq!(urls.len(), 1);
        claim_eq!(urls[0].url, String::from(TOKEN_METADATA_URL));
        claim!(urls[0].hash.is_none());

        let params = ContractTokenMetadataQueryParams {
            queries: vec![TokenIdU64(9)],
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);

        let result = token_metadata(&ctx, &host);
        claim_eq!(result, Err(ContractError::InvalidTokenId));
    }

    #[concordium_test]
    fn test_owner_of_view() {
        let host = minted_host();

        let bytes = to_bytes(&TokenIdU64(0));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);
        let owner = owner_of(&ctx, &host).expect_report("Failed to call ownerOf");
        claim_eq!(owner, Address::Account(OWNER));

        let bytes = to_bytes(&TokenIdU64(9));
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);
        let result = owner_of(&ctx, &host);
        claim_eq!(result, Err(ContractError::InvalidTokenId));

        let ctx = TestReceiveContext::empty();
        let counter =
            get_token_counter(&ctx, &host).expect_report("Failed to call getTokenCounter");
        claim_eq!(counter, 1);
    }

    #[concordium_test]
    fn test_transfer_invokes_receive_hook() {
        let mut host = minted_host();
        host.setup_mock_entrypoint(
            HOOK_TARGET,
            OwnedEntrypointName::new_unchecked(String::from("onReceivingCIS2")),
            parse_and_check_mock::<OnReceivingCis2Params<ContractTokenId, ContractTokenAmount>, _>(
                |params| {
                    params.token_id == TokenIdU64(0)
                        && params.amount == ContractTokenAmount::from(1)
                        && params.from == Address::Account(OWNER)
                },
                (),
            ),
        );

        let params = transfer_params(
            TokenIdU64(0),
            Address::Account(OWNER),
            Receiver::Contract(
                HOOK_TARGET,
                OwnedEntrypointName::new_unchecked(String::from("onReceivingCIS2")),
            ),
        );
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(OWNER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        claim_eq!(
            host.state().owner_of(&TokenIdU64(0)),
            Ok(Address::Contract(HOOK_TARGET))
        );
    }
}
