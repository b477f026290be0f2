//! Mock builders for testing contracts against stubbed entrypoints of other
//! contracts. Compiled with the `std` feature, which test builds enable.

use concordium_std::test_infrastructure::MockFn;
use concordium_std::*;

/// Mock entrypoint that checks the parameter parses as `D` and responds
/// with a fixed return value.
pub fn parse_and_ok_mock<D: Deserial, S>(return_value: impl Clone + Serial + 'static) -> MockFn<S> {
    MockFn::new(move |parameter, _amount, _balance, _state| {
        D::deserial(&mut Cursor::new(parameter)).map_err(|_| CallContractError::Trap)?;
        Ok((false, Some(return_value.clone())))
    })
}

/// Mock entrypoint that validates the parsed parameter with `check` before
/// responding with a fixed return value. Calls that fail the check trap.
pub fn parse_and_check_mock<D: Deserial, S>(
    check: impl Fn(&D) -> bool + 'static,
    return_value: impl Clone + Serial + 'static,
) -> MockFn<S> {
    MockFn::new(move |parameter, _, _, _state| {
        let value =
            D::deserial(&mut Cursor::new(parameter)).map_err(|_| CallContractError::Trap)?;
        if !check(&value) {
            return Err(CallContractError::Trap);
        };
        Ok((false, Some(return_value.clone())))
    })
}

/// Mock entrypoint that derives the response from the parsed parameter.
/// Returning `None` traps the call.
pub fn parse_and_map_mock<D: Deserial, T: Serial, S>(
    f: impl Fn(&D) -> Option<T> + 'static,
) -> MockFn<S> {
    MockFn::new(move |parameter, _, _, _state| {
        let value =
            D::deserial(&mut Cursor::new(parameter)).map_err(|_| CallContractError::Trap)?;
        f(&value)
            .map(|r| (false, Some(r)))
            .ok_or(CallContractError::Trap)
    })
}
