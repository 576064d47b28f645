use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 1,
    RoleConflict = 2,
    InvalidState = 3,
    AlreadyRegistered = 4,
    NoSuchCandidate = 5,
    InsufficientFunds = 6,
    InsufficientAllowance = 7,
    TransferRejected = 8,
    InvalidAmount = 9,
    InvalidPageSize = 10,
    EmptyAccountList = 11,
    PayeeRequired = 12,
    Underfunded = 13,
    EscrowNotFound = 14,
    Overflow = 15,
}

/// Failure reported by the external asset when pulling or pushing value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TransferError {
    InsufficientBalance,
    InsufficientAllowance,
    TransferRejected,
}

impl From<TransferError> for Error {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::InsufficientBalance => Error::InsufficientFunds,
            TransferError::InsufficientAllowance => Error::InsufficientAllowance,
            TransferError::TransferRejected => Error::TransferRejected,
        }
    }
}

/// Rejects zero and negative amounts.
pub fn require_positive(amount: i128) -> Result<i128, Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(amount)
}
