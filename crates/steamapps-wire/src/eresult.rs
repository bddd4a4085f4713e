//! Result codes carried in response bodies.

/// Operation result reported by the server.
///
/// Only the codes this service category produces in practice get a named
/// variant; anything else is preserved verbatim in [`EResult::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EResult {
    /// No result was set.
    Invalid,
    /// Success.
    Ok,
    /// Generic failure.
    #[default]
    Fail,
    /// No connection to the backend.
    NoConnection,
    /// A parameter was invalid.
    InvalidParam,
    /// The backend is busy.
    Busy,
    /// The caller may not access the resource.
    AccessDenied,
    /// The operation timed out.
    Timeout,
    /// The account is banned.
    Banned,
    /// The service is unavailable.
    ServiceUnavailable,
    /// The caller is not logged on.
    NotLoggedOn,
    /// The request is pending.
    Pending,
    /// Rate or quota exceeded.
    LimitExceeded,
    /// Any code without a dedicated variant.
    Other(i32),
}

impl EResult {
    /// Returns the numeric code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Invalid => 0,
            Self::Ok => 1,
            Self::Fail => 2,
            Self::NoConnection => 3,
            Self::InvalidParam => 8,
            Self::Busy => 10,
            Self::AccessDenied => 15,
            Self::Timeout => 16,
            Self::Banned => 17,
            Self::ServiceUnavailable => 20,
            Self::NotLoggedOn => 21,
            Self::Pending => 22,
            Self::LimitExceeded => 25,
            Self::Other(code) => code,
        }
    }

    /// Returns true for [`EResult::Ok`].
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<i32> for EResult {
    fn from(code: i32) -> Self {
        match code {
            0 => Self::Invalid,
            1 => Self::Ok,
            2 => Self::Fail,
            3 => Self::NoConnection,
            8 => Self::InvalidParam,
            10 => Self::Busy,
            15 => Self::AccessDenied,
            16 => Self::Timeout,
            17 => Self::Banned,
            20 => Self::ServiceUnavailable,
            21 => Self::NotLoggedOn,
            22 => Self::Pending,
            25 => Self::LimitExceeded,
            other => Self::Other(other),
        }
    }
}
