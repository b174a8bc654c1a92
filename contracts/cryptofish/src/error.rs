use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 0,
    OwnerNotSet = 1,
    InvalidHexDigit = 2,
    AttributeExhausted = 3,
    TxHashTooLong = 4,
}
