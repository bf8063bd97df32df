//! Result codes returned by the toast pipelines

use std::fmt;

/// Outcome of a single pipeline invocation.
///
/// The numeric values are stable and form the whole contract seen by
/// callers that only look at the returned integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultCode {
    Success,
    FatalError,
    InitializationFailed,
    ModuleLoadFailed,
    LogLoadFailed,
    AssemblyLoadFailed,
    IdentityAssignmentFailed,
    MarkupLoadFailed,
    NotificationCreationFailed,
    ExitFailed,
    IdentityNotFound,
}

impl ResultCode {
    /// Every member of the enumeration, in numeric order of the failure codes.
    pub const ALL: [ResultCode; 11] = [
        Self::Success,
        Self::FatalError,
        Self::InitializationFailed,
        Self::ModuleLoadFailed,
        Self::LogLoadFailed,
        Self::AssemblyLoadFailed,
        Self::IdentityAssignmentFailed,
        Self::MarkupLoadFailed,
        Self::NotificationCreationFailed,
        Self::ExitFailed,
        Self::IdentityNotFound,
    ];

    /// Integer value of the code
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::FatalError => -1,
            Self::InitializationFailed => 4000,
            Self::ModuleLoadFailed => 4001,
            Self::LogLoadFailed => 4002,
            Self::AssemblyLoadFailed => 4003,
            Self::IdentityAssignmentFailed => 4004,
            Self::MarkupLoadFailed => 4005,
            Self::NotificationCreationFailed => 4006,
            Self::ExitFailed => 4007,
            Self::IdentityNotFound => 4008,
        }
    }

    /// Symbolic name of the code
    pub const fn name(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::FatalError => "FatalError",
            Self::InitializationFailed => "InitializationFailed",
            Self::ModuleLoadFailed => "ModuleLoadFailed",
            Self::LogLoadFailed => "LogLoadFailed",
            Self::AssemblyLoadFailed => "AssemblyLoadFailed",
            Self::IdentityAssignmentFailed => "IdentityAssignmentFailed",
            Self::MarkupLoadFailed => "MarkupLoadFailed",
            Self::NotificationCreationFailed => "NotificationCreationFailed",
            Self::ExitFailed => "ExitFailed",
            Self::IdentityNotFound => "IdentityNotFound",
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Look up a code by its integer value
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl From<ResultCode> for i32 {
    fn from(code: ResultCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.name())
    }
}
