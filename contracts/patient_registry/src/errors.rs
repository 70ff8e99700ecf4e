use soroban_sdk::contracttype;

/// Error categories for classifying different types of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Invalid input parameters or lifecycle misuse
    Validation = 1,
    /// Caller ownership and grant failures
    Authorization = 2,
    /// Profile lookup failures
    NotFound = 3,
    /// Duplicate registrations
    StateConflict = 4,
    /// Temporary failures that may succeed on retry
    Transient = 5,
    /// Contract-level conditions like pausing
    System = 6,
}

/// Error severity levels indicating the impact and urgency of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

/// Contract errors. Codes are part of the contract interface and must not be renumbered.
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    NotRegistered = 4,
    AlreadyRegistered = 5,
    InvalidInput = 6,
    AccessDenied = 7,
    Paused = 8,
    RateLimitExceeded = 9,
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::InvalidInput => ErrorCategory::Validation,
            ContractError::Unauthorized | ContractError::AccessDenied => {
                ErrorCategory::Authorization
            }
            ContractError::NotRegistered => ErrorCategory::NotFound,
            ContractError::AlreadyRegistered => ErrorCategory::StateConflict,
            ContractError::RateLimitExceeded => ErrorCategory::Transient,
            ContractError::Paused => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::InvalidInput
            | ContractError::NotRegistered
            | ContractError::AlreadyRegistered => ErrorSeverity::Low,
            ContractError::Unauthorized
            | ContractError::AccessDenied
            | ContractError::RateLimitExceeded => ErrorSeverity::Medium,
            ContractError::Paused => ErrorSeverity::Critical,
        }
    }

    /// Only rate limiting clears by itself; everything else needs a state change first.
    pub fn retryable(&self) -> bool {
        matches!(self, ContractError::RateLimitExceeded)
    }

    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::Unauthorized => "Caller is not the owner of this profile",
            ContractError::NotRegistered => "Identity is not registered in this role",
            ContractError::AlreadyRegistered => "Identity is already registered in this role",
            ContractError::InvalidInput => "Invalid input parameters provided",
            ContractError::AccessDenied => "No active access grant for this patient",
            ContractError::Paused => "Contract operations are currently paused",
            ContractError::RateLimitExceeded => "Rate limit exceeded, please retry later",
        }
    }
}
