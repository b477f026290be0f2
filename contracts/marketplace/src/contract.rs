use crate::events::{ItemCanceledEvent, ItemListedEvent, MarketEvent, NftBoughtEvent};
use crate::external::ListParams;
use crate::state::{Listing, State};
use commons::{
    ContractError, ContractReadError, ContractResult, CustomContractError, HostNftExt, Token,
};
use concordium_std::*;

/// Initialize the marketplace with no listings and no proceeds.
#[init(contract = "Marketplace")]
fn init<S: HasStateApi>(
    _ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    Ok(State::empty(state_builder))
}

/// Offer a token for sale at a fixed price. The token stays with the seller,
/// who must have added this contract as an operator on the collection.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Sender is not an account address;
/// - The price is zero;
/// - The token is already listed;
/// - The collection does not report the sender as the owner of the token;
/// - The collection does not report this contract as an operator of the
///   sender;
/// - Fails to log `ItemListed` event.
#[receive(
    mutable,
    contract = "Marketplace",
    name = "listItem",
    parameter = "ListParams",
    enable_logger
)]
fn list_item<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params = ListParams::deserial(&mut ctx.parameter_cursor())?;

    let seller = if let Address::Account(seller) = ctx.sender() {
        seller
    } else {
        bail!(CustomContractError::OnlyAccountAddress.into());
    };

    ensure!(
        params.price > Amount::zero(),
        CustomContractError::PriceMustBeAboveZero.into()
    );
    ensure!(
        host.state().listing(&params.token).is_none(),
        CustomContractError::AlreadyListed.into()
    );

    let owner = host
        .nft_owner_of(&params.token)
        .map_err(handle_read_error)?;
    ensure!(
        owner == Address::Account(seller),
        CustomContractError::NotOwner.into()
    );

    let approved = host
        .nft_is_operator(
            &params.token,
            Address::Account(seller),
            Address::Contract(ctx.self_address()),
        )
        .map_err(handle_read_error)?;
    ensure!(
        approved,
        CustomContractError::NotApprovedForMarketplace.into()
    );

    let state = host.state_mut();
    state.put_listing(
        params.token,
        Listing {
            seller,
            price: params.price,
        },
    );
    let seq = state.next_event_seq();

    logger.log(&MarketEvent::ItemListed(ItemListedEvent {
        seq,
        origin: ctx.invoker(),
        token: params.token,
        seller,
        price: params.price,
    }))?;

    Ok(())
}

/// Change the price of an active listing. The seller of the listing stays
/// unchanged. Consumers cannot tell a price update from a fresh listing:
/// both log `ItemListed`.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Sender is not an account address;
/// - The token is not listed;
/// - The collection does not report the sender as the owner of the token;
/// - The new price is zero;
/// - Fails to log `ItemListed` event.
#[receive(
    mutable,
    contract = "Marketplace",
    name = "updateListing",
    parameter = "ListParams",
    enable_logger
)]
fn update_listing<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params = ListParams::deserial(&mut ctx.parameter_cursor())?;

    let sender = if let Address::Account(sender) = ctx.sender() {
        sender
    } else {
        bail!(CustomContractError::OnlyAccountAddress.into());
    };

    let listing = match host.state().listing(&params.token) {
        Some(listing) => listing,
        None => bail!(CustomContractError::NotListed.into()),
    };

    let owner = host
        .nft_owner_of(&params.token)
        .map_err(handle_read_error)?;
    ensure!(
        owner == Address::Account(sender),
        CustomContractError::NotOwner.into()
    );

    ensure!(
        params.price > Amount::zero(),
        CustomContractError::PriceMustBeAboveZero.into()
    );

    let state = host.state_mut();
    state.put_listing(
        params.token,
        Listing {
            seller: listing.seller,
            price: params.price,
        },
    );
    let seq = state.next_event_seq();

    logger.log(&MarketEvent::ItemListed(ItemListedEvent {
        seq,
        origin: ctx.invoker(),
        token: params.token,
        seller: listing.seller,
        price: params.price,
    }))?;

    Ok(())
}

/// Withdraw a token from sale.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Sender is not an account address;
/// - The token is not listed;
/// - The collection does not report the sender as the owner of the token;
/// - Fails to log `ItemCanceled` event.
#[receive(
    mutable,
    contract = "Marketplace",
    name = "cancelListing",
    parameter = "Token",
    enable_logger
)]
fn cancel_listing<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let token = Token::deserial(&mut ctx.parameter_cursor())?;

    let sender = if let Address::Account(sender) = ctx.sender() {
        sender
    } else {
        bail!(CustomContractError::OnlyAccountAddress.into());
    };

    let listing = match host.state().listing(&token) {
        Some(listing) => listing,
        None => bail!(CustomContractError::NotListed.into()),
    };

    let owner = host.nft_owner_of(&token).map_err(handle_read_error)?;
    ensure!(
        owner == Address::Account(sender),
        CustomContractError::NotOwner.into()
    );

    let state = host.state_mut();
    state.remove_listing(&token);
    let seq = state.next_event_seq();

    logger.log(&MarketEvent::ItemCanceled(ItemCanceledEvent {
        seq,
        origin: ctx.invoker(),
        token,
        seller: listing.seller,
    }))?;

    Ok(())
}

/// Buy a listed token for the attached CCD. The attached amount must cover
/// the listed price; anything above it is kept by the contract and not
/// refunded. The seller is credited exactly the listed price and collects it
/// later through `withdrawProceeds`.
///
/// The listing is removed and the seller credited before the collection
/// contract is invoked, so a reentrant call during the token transfer finds
/// the token already unlisted.
///
/// It rejects if:
/// - Fails to parse parameter;
/// - Sender is not an account address;
/// - The token is not listed;
/// - The attached amount is below the listed price;
/// - The token transfer on the collection fails;
/// - Fails to log `NftBought` event.
#[receive(
    mutable,
    payable,
    contract = "Marketplace",
    name = "buyItem",
    parameter = "Token",
    enable_logger
)]
fn buy_item<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let token = Token::deserial(&mut ctx.parameter_cursor())?;

    let buyer = if let Address::Account(buyer) = ctx.sender() {
        buyer
    } else {
        bail!(CustomContractError::OnlyAccountAddress.into());
    };

    let listing = match host.state().listing(&token) {
        Some(listing) => listing,
        None => bail!(CustomContractError::NotListed.into()),
    };

    ensure!(
        amount >= listing.price,
        CustomContractError::PriceNotMet.into()
    );

    let state = host.state_mut();
    state.remove_listing(&token);
    state.credit_proceeds(listing.seller, listing.price);
    let seq = state.next_event_seq();

    host.nft_transfer(&token, listing.seller, buyer)
        .map_err(handle_call_error)?;

    logger.log(&MarketEvent::NftBought(NftBoughtEvent {
        seq,
        origin: ctx.invoker(),
        token,
        buyer,
        price: listing.price,
    }))?;

    Ok(())
}

/// Pay out all accumulated sale proceeds to the sender. The ledger entry is
/// zeroed before the transfer is invoked.
///
/// It rejects if:
/// - Sender is not an account address;
/// - The sender has no proceeds;
/// - The CCD transfer fails.
#[receive(mutable, contract = "Marketplace", name = "withdrawProceeds")]
fn withdraw_proceeds<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    let seller = if let Address::Account(seller) = ctx.sender() {
        seller
    } else {
        bail!(CustomContractError::OnlyAccountAddress.into());
    };

    let amount = host.state_mut().take_proceeds(&seller);
    ensure!(
        amount > Amount::zero(),
        CustomContractError::NoProceeds.into()
    );

    host.invoke_transfer(&seller, amount)?;

    Ok(())
}

/// View the listing of a token. Tokens that are not listed report the
/// sentinel listing: a zero price with the all zero account as seller.
///
/// It rejects if:
/// - Fails to parse parameter.
#[receive(
    contract = "Marketplace",
    name = "getListing",
    parameter = "Token",
    return_value = "Listing"
)]
fn get_listing<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Listing> {
    let token = Token::deserial(&mut ctx.parameter_cursor())?;

    Ok(host
        .state()
        .listing(&token)
        .unwrap_or_else(Listing::sentinel))
}

/// View the withdrawable sale proceeds of an account.
///
/// It rejects if:
/// - Fails to parse parameter.
#[receive(
    contract = "Marketplace",
    name = "getProceeds",
    parameter = "AccountAddress",
    return_value = "Amount"
)]
fn get_proceeds<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Amount> {
    let seller = AccountAddress::deserial(&mut ctx.parameter_cursor())?;

    Ok(host.state().proceeds(&seller))
}

/// Map errors of calls into the collection contract to a marketplace error.
fn handle_call_error<R>(error: CallContractError<R>) -> ContractError {
    match error {
        CallContractError::MissingEntrypoint | CallContractError::MessageFailed => {
            CustomContractError::Incompatible.into()
        }
        _ => CustomContractError::InvokeContractError.into(),
    }
}

/// Map errors of read only queries to the collection contract to a
/// marketplace error.
fn handle_read_error<R>(error: ContractReadError<R>) -> ContractError {
    match error {
        ContractReadError::Call(error) => handle_call_error(error),
        ContractReadError::Compatibility => CustomContractError::Incompatible.into(),
        ContractReadError::Parse => CustomContractError::InvokeContractError.into(),
    }
}

#[concordium_cfg_test]
mod tests {
    use commons::test::*;
    use commons::{ContractTokenAmount, ContractTokenId, Token, TransferParameter, NULL_ACCOUNT};
    use concordium_cis2::{
        OperatorOfQueryParams, OperatorOfQueryResponse, Receiver, TokenIdU64, TransferParams,
    };
    use concordium_std::*;
    use test_infrastructure::*;

    use super::*;

    const SELLER: AccountAddress = AccountAddress([1; 32]);
    const BUYER: AccountAddress = AccountAddress([2; 32]);
    const OTHER: AccountAddress = AccountAddress([3; 32]);

    const COLLECTION: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };
    const MARKETPLACE: ContractAddress = ContractAddress {
        index: 5,
        subindex: 0,
    };

    fn token_0() -> Token {
        Token {
            contract: COLLECTION,
            id: TokenIdU64(0),
        }
    }

    fn price() -> Amount {
        Amount::from_ccd(100)
    }

    fn new_host() -> TestHost<State<TestStateApi>> {
        let ctx = TestInitContext::empty();
        let mut state_builder = TestStateBuilder::new();

        let state = init(&ctx, &mut state_builder).expect_report("Failed during init_Marketplace");

        TestHost::new(state, state_builder)
    }

    /// Mount `ownerOf` and `operatorOf` mocks on the collection contract.
    /// The `ownerOf` mock rejects ids other than the one of `token_0`, like
    /// a collection rejects unminted tokens.
    fn setup_collection(host: &mut TestHost<State<TestStateApi>>, owner: Address, approved: bool) {
        host.setup_mock_entrypoint(
            COLLECTION,
            OwnedEntrypointName::new_unchecked(String::from("ownerOf")),
            parse_and_map_mock::<ContractTokenId, _, _>(move |id| {
                if *id == token_0().id {
                    Some(owner)
                } else {
                    None
                }
            }),
        );
        host.setup_mock_entrypoint(
            COLLECTION,
            OwnedEntrypointName::new_unchecked(String::from("operatorOf")),
            parse_and_map_mock::<OperatorOfQueryParams, _, _>(move |_| {
                Some(OperatorOfQueryResponse(vec![approved]))
            }),
        );
    }

    /// Host with `token_0` listed by `SELLER` at `price`.
    fn listed_host() -> TestHost<State<TestStateApi>> {
        let mut host = new_host();
        setup_collection(&mut host, Address::Account(SELLER), true);

        let params = ListParams {
            token: token_0(),
            price: price(),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER))
            .set_invoker(SELLER)
            .set_self_address(MARKETPLACE)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        host
    }

    /// Mock of the collection `transfer` entrypoint. Checks the transfer
    /// instruction and that the listing was settled before the collection
    /// was invoked.
    fn transfer_mock(seller: AccountAddress, buyer: AccountAddress) -> MockFn<State<TestStateApi>> {
        MockFn::new(move |parameter, _amount, _balance, state: &mut State<TestStateApi>| {
            let TransferParams(transfers) =
                TransferParameter::deserial(&mut Cursor::new(parameter))
                    .map_err(|_| CallContractError::Trap)?;
            if transfers.len() != 1 {
                return Err(CallContractError::Trap);
            }
            let transfer = &transfers[0];

            let to_buyer = match &transfer.to {
                Receiver::Account(account) => *account == buyer,
                Receiver::Contract(..) => false,
            };
            let settled =
                state.listing(&token_0()).is_none() && state.proceeds(&seller) == price();

            if transfer.token_id != token_0().id
                || transfer.amount != ContractTokenAmount::from(1)
                || transfer.from != Address::Account(seller)
                || !to_buyer
                || !settled
            {
                return Err(CallContractError::Trap);
            }

            Ok((false, Some(())))
        })
    }

    #[concordium_test]
    fn test_init() {
        let host = new_host();

        claim_eq!(host.state().listing(&token_0()), None);
        claim_eq!(host.state().proceeds(&SELLER), Amount::zero());
        claim_eq!(host.state().event_seq, 0);
    }

    #[concordium_test]
    fn test_list() {
        let mut host = new_host();
        host.setup_mock_entrypoint(
            COLLECTION,
            OwnedEntrypointName::new_unchecked(String::from("ownerOf")),
            parse_and_check_mock::<ContractTokenId, _>(
                |id| *id == token_0().id,
                Address::Account(SELLER),
            ),
        );
        host.setup_mock_entrypoint(
            COLLECTION,
            OwnedEntrypointName::new_unchecked(String::from("operatorOf")),
            parse_and_map_mock::<OperatorOfQueryParams, _, _>(|params| {
                let approved = params.queries.len() == 1
                    && params.queries[0].owner == Address::Account(SELLER)
                    && params.queries[0].address == Address::Contract(MARKETPLACE);

                if approved {
                    Some(OperatorOfQueryResponse(vec![true]))
                } else {
                    None
                }
            }),
        );

        let params = ListParams {
            token: token_0(),
            price: price(),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER))
            .set_invoker(SELLER)
            .set_self_address(MARKETPLACE)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        claim_eq!(
            host.state().listing(&token_0()),
            Some(Listing {
                seller: SELLER,
                price: price()
            })
        );
        claim_eq!(logger.logs.len(), 1);
        claim_eq!(
            logger.logs[0],
            to_bytes(&MarketEvent::ItemListed(ItemListedEvent {
                seq: 0,
                origin: SELLER,
                token: token_0(),
                seller: SELLER,
                price: price(),
            }))
        );
    }

    #[concordium_test]
    fn test_list_rejects_zero_price() {
        let mut host = new_host();
        setup_collection(&mut host, Address::Account(SELLER), true);

        let params = ListParams {
            token: token_0(),
            price: Amount::zero(),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER))
            .set_self_address(MARKETPLACE)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);
        claim_eq!(
            result,
            Err(CustomContractError::PriceMustBeAboveZero.into())
        );
        claim_eq!(host.state().listing(&token_0()), None);
        claim_eq!(logger.logs.len(), 0);
    }

    #[concordium_test]
    fn test_list_rejects_already_listed() {
        let mut host = listed_host();

        let params = ListParams {
            token: token_0(),
            price: Amount::from_ccd(1),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER))
            .set_self_address(MARKETPLACE)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::AlreadyListed.into()));

        // The listing keeps the original price.
        claim_eq!(
            host.state().listing(&token_0()),
            Some(Listing {
                seller: SELLER,
                price: price()
            })
        );
    }

    #[concordium_test]
    fn test_list_rejects_not_owner() {
        let mut host = new_host();
        setup_collection(&mut host, Address::Account(OTHER), true);

        let params = ListParams {
            token: token_0(),
            price: price(),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER))
            .set_self_address(MARKETPLACE)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::NotOwner.into()));
        claim_eq!(host.state().listing(&token_0()), None);
    }

    #[concordium_test]
    fn test_list_rejects_not_approved() {
        let mut host = new_host();
        setup_collection(&mut host, Address::Account(SELLER), false);

        let params = ListParams {
            token: token_0(),
            price: price(),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER))
            .set_self_address(MARKETPLACE)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);
        claim_eq!(
            result,
            Err(CustomContractError::NotApprovedForMarketplace.into())
        );
        claim_eq!(host.state().listing(&token_0()), None);
    }

    #[concordium_test]
    fn test_list_rejects_contract_sender() {
        let mut host = new_host();

        let params = ListParams {
            token: token_0(),
            price: price(),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Contract(COLLECTION))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::OnlyAccountAddress.into()));
    }

    #[concordium_test]
    fn test_list_rejects_incompatible_collection() {
        let mut host = new_host();
        // A collection that returns no value from `ownerOf`.
        host.setup_mock_entrypoint(
            COLLECTION,
            OwnedEntrypointName::new_unchecked(String::from("ownerOf")),
            MockFn::new(|_parameter, _amount, _balance, _state| {
                Ok((false, Option::<Address>::None))
            }),
        );

        let params = ListParams {
            token: token_0(),
            price: price(),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER))
            .set_self_address(MARKETPLACE)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::Incompatible.into()));
    }

    #[concordium_test]
    fn test_update_price() {
        let mut host = listed_host();

        let params = ListParams {
            token: token_0(),
            price: Amount::from_ccd(150),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER))
            .set_invoker(SELLER)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_listing(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        claim_eq!(
            host.state().listing(&token_0()),
            Some(Listing {
                seller: SELLER,
                price: Amount::from_ccd(150)
            })
        );
        claim_eq!(logger.logs.len(), 1);
        claim_eq!(
            logger.logs[0],
            to_bytes(&MarketEvent::ItemListed(ItemListedEvent {
                seq: 1,
                origin: SELLER,
                token: token_0(),
                seller: SELLER,
                price: Amount::from_ccd(150),
            }))
        );
    }

    #[concordium_test]
    fn test_update_rejects_not_listed() {
        let mut host = new_host();
        setup_collection(&mut host, Address::Account(SELLER), true);

        let params = ListParams {
            token: token_0(),
            price: price(),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_listing(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::NotListed.into()));
    }

    #[concordium_test]
    fn test_update_rejects_not_owner() {
        let mut host = listed_host();
        // The token changed hands on the collection after it was listed.
        setup_collection(&mut host, Address::Account(OTHER), true);

        let params = ListParams {
            token: token_0(),
            price: Amount::from_ccd(150),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_listing(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::NotOwner.into()));

        claim_eq!(
            host.state().listing(&token_0()),
            Some(Listing {
                seller: SELLER,
                price: price()
            })
        );
    }

    #[concordium_test]
    fn test_update_rejects_zero_price() {
        let mut host = listed_host();

        let params = ListParams {
            token: token_0(),
            price: Amount::zero(),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_listing(&ctx, &mut host, &mut logger);
        claim_eq!(
            result,
            Err(CustomContractError::PriceMustBeAboveZero.into())
        );

        claim_eq!(
            host.state().listing(&token_0()),
            Some(Listing {
                seller: SELLER,
                price: price()
            })
        );
    }

    #[concordium_test]
    fn test_cancel() {
        let mut host = listed_host();

        let bytes = to_bytes(&token_0());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER))
            .set_invoker(SELLER)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = cancel_listing(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        claim_eq!(host.state().listing(&token_0()), None);
        claim_eq!(logger.logs.len(), 1);
        claim_eq!(
            logger.logs[0],
            to_bytes(&MarketEvent::ItemCanceled(ItemCanceledEvent {
                seq: 1,
                origin: SELLER,
                token: token_0(),
                seller: SELLER,
            }))
        );

        // Cancelling again finds nothing to cancel.
        let mut logger = TestLogger::init();
        let result = cancel_listing(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::NotListed.into()));
    }

    #[concordium_test]
    fn test_cancel_rejects_not_owner() {
        let mut host = listed_host();
        setup_collection(&mut host, Address::Account(OTHER), true);

        let bytes = to_bytes(&token_0());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = cancel_listing(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(CustomContractError::NotOwner.into()));
        claim!(host.state().listing(&token_0()).is_some());
    }

    #[concordium_test]
    fn test_buy() {
        let mut host = listed_host();
        host.setup_mock_entrypoint(
            COLLECTION,
            OwnedEntrypointName::new_unchecked(String::from("transfer")),
            transfer_mock(SELLER, BUYER),
        );

        let bytes = to_bytes(&token_0());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(BUYER))
            .set_invoker(BUYER)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = buy_item(&ctx, &mut host, price(), &mut logger);
        claim_eq!(result, Ok(()));

        claim_eq!(host.state().listing(&token_0()), None);
        claim_eq!(host.state().proceeds(&SELLER), price());
        claim_eq!(logger.logs.len(), 1);
        claim_eq!(
            logger.logs[0],
            to_bytes(&MarketEvent::NftBought(NftBoughtEvent {
                seq: 1,
                origin: BUYER,
                token: token_0(),
                buyer: BUYER,
                price: price(),
            }))
        );
    }

    #[concordium_test]
    fn test_buy_rejects_not_listed() {
        let mut host = new_host();

        let bytes = to_bytes(&token_0());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(BUYER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = buy_item(&ctx, &mut host, price(), &mut logger);
        claim_eq!(result, Err(CustomContractError::NotListed.into()));
    }

    #[concordium_test]
    fn test_buy_rejects_price_not_met() {
        let mut host = listed_host();

        let bytes = to_bytes(&token_0());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(BUYER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = buy_item(&ctx, &mut host, Amount::from_ccd(99), &mut logger);
        claim_eq!(result, Err(CustomContractError::PriceNotMet.into()));

        claim!(host.state().listing(&token_0()).is_some());
        claim_eq!(host.state().proceeds(&SELLER), Amount::zero());
        claim_eq!(logger.logs.len(), 0);
    }

    #[concordium_test]
    fn test_buy_accepts_overpayment() {
        let mut host = listed_host();
        host.setup_mock_entrypoint(
            COLLECTION,
            OwnedEntrypointName::new_unchecked(String::from("transfer")),
            parse_and_ok_mock::<TransferParameter, _>(()),
        );

        let bytes = to_bytes(&token_0());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(BUYER))
            .set_invoker(BUYER)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = buy_item(&ctx, &mut host, Amount::from_ccd(150), &mut logger);
        claim_eq!(result, Ok(()));

        // The seller is credited the listed price, not the attached amount.
        claim_eq!(host.state().proceeds(&SELLER), price());
    }

    #[concordium_test]
    fn test_buy_rejects_failed_transfer() {
        let mut host = listed_host();
        host.setup_mock_entrypoint(
            COLLECTION,
            OwnedEntrypointName::new_unchecked(String::from("transfer")),
            MockFn::new(|_parameter, _amount, _balance, _state| {
                Err(CallContractError::LogicReject {
                    reason: -42,
                    return_value: (),
                })
            }),
        );

        let bytes = to_bytes(&token_0());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(BUYER))
            .set_invoker(BUYER)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = buy_item(&ctx, &mut host, price(), &mut logger);
        claim_eq!(result, Err(CustomContractError::InvokeContractError.into()));
        claim_eq!(logger.logs.len(), 0);
    }

    #[concordium_test]
    fn test_withdraw() {
        let mut host = new_host();
        host.state_mut().credit_proceeds(SELLER, price());
        host.set_self_balance(price());

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER));

        let result = withdraw_proceeds(&ctx, &mut host);
        claim_eq!(result, Ok(()));

        claim_eq!(host.state().proceeds(&SELLER), Amount::zero());
        claim!(host.transfer_occurred(&SELLER, price()));

        // A repeated withdrawal finds nothing to pay out.
        let result = withdraw_proceeds(&ctx, &mut host);
        claim_eq!(result, Err(CustomContractError::NoProceeds.into()));
        claim_eq!(host.get_transfers().len(), 1);
    }

    #[concordium_test]
    fn test_withdraw_rejects_no_proceeds() {
        let mut host = new_host();

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(BUYER));

        let result = withdraw_proceeds(&ctx, &mut host);
        claim_eq!(result, Err(CustomContractError::NoProceeds.into()));
        claim!(host.get_transfers().is_empty());
    }

    #[concordium_test]
    fn test_get_listing_sentinel() {
        let host = new_host();

        let bytes = to_bytes(&token_0());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);

        let listing = get_listing(&ctx, &host).expect_report("Failed to call getListing");
        claim_eq!(listing, Listing::sentinel());
        claim_eq!(listing.seller, NULL_ACCOUNT);
        claim_eq!(listing.price, Amount::zero());
    }

    #[concordium_test]
    fn test_get_proceeds() {
        let mut host = new_host();
        host.state_mut().credit_proceeds(SELLER, price());

        let bytes = to_bytes(&SELLER);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);
        let proceeds = get_proceeds(&ctx, &host).expect_report("Failed to call getProceeds");
        claim_eq!(proceeds, price());

        // Accounts without sales owe zero.
        let bytes = to_bytes(&BUYER);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);
        let proceeds = get_proceeds(&ctx, &host).expect_report("Failed to call getProceeds");
        claim_eq!(proceeds, Amount::zero());
    }

    /// List, buy and withdraw in sequence, checking the view entrypoints
    /// after every step.
    #[concordium_test]
    fn test_marketplace_scenario() {
        let mut host = new_host();
        setup_collection(&mut host, Address::Account(SELLER), true);
        host.setup_mock_entrypoint(
            COLLECTION,
            OwnedEntrypointName::new_unchecked(String::from("transfer")),
            transfer_mock(SELLER, BUYER),
        );

        // The seller lists the token for 100 CCD.
        let params = ListParams {
            token: token_0(),
            price: price(),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER))
            .set_invoker(SELLER)
            .set_self_address(MARKETPLACE)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();
        claim_eq!(list_item(&ctx, &mut host, &mut logger), Ok(()));

        let bytes = to_bytes(&token_0());
        let mut view_ctx = TestReceiveContext::empty();
        view_ctx.set_parameter(&bytes);
        let listing = get_listing(&view_ctx, &host).expect_report("Failed to call getListing");
        claim_eq!(
            listing,
            Listing {
                seller: SELLER,
                price: price()
            }
        );

        // The buyer pays the exact price.
        let bytes = to_bytes(&token_0());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(BUYER))
            .set_invoker(BUYER)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();
        claim_eq!(buy_item(&ctx, &mut host, price(), &mut logger), Ok(()));

        let bytes = to_bytes(&token_0());
        let mut view_ctx = TestReceiveContext::empty();
        view_ctx.set_parameter(&bytes);
        let listing = get_listing(&view_ctx, &host).expect_report("Failed to call getListing");
        claim_eq!(listing, Listing::sentinel());

        let bytes = to_bytes(&SELLER);
        let mut view_ctx = TestReceiveContext::empty();
        view_ctx.set_parameter(&bytes);
        let proceeds = get_proceeds(&view_ctx, &host).expect_report("Failed to call getProceeds");
        claim_eq!(proceeds, price());

        // The seller withdraws the sale price.
        host.set_self_balance(price());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER));
        claim_eq!(withdraw_proceeds(&ctx, &mut host), Ok(()));
        claim!(host.transfer_occurred(&SELLER, price()));

        let bytes = to_bytes(&SELLER);
        let mut view_ctx = TestReceiveContext::empty();
        view_ctx.set_parameter(&bytes);
        let proceeds = get_proceeds(&view_ctx, &host).expect_report("Failed to call getProceeds");
        claim_eq!(proceeds, Amount::zero());

        // Nothing left to withdraw.
        claim_eq!(
            withdraw_proceeds(&ctx, &mut host),
            Err(CustomContractError::NoProceeds.into())
        );
    }
}
