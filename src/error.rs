use serde::{Serialize, Serializer};

/// Error codes returned to clients / 返回给客户端的错误码
///
/// Serialized as the code string, e.g. `"U-1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // General
    Internal,
    NumericIdRequired,
    InvalidQueryCharacter,

    // User
    UserNotFound,
    InvalidLengthFirstName,
    InvalidLengthLastName,
    InvalidLengthPrefixes,
}

impl ErrorCode {
    pub fn code(self) -> &'static str {
        match self {
            ErrorCode::Internal => "G-0",
            ErrorCode::NumericIdRequired => "G-1",
            ErrorCode::InvalidQueryCharacter => "G-5",
            ErrorCode::UserNotFound => "U-1",
            ErrorCode::InvalidLengthFirstName => "U-201",
            ErrorCode::InvalidLengthLastName => "U-202",
            ErrorCode::InvalidLengthPrefixes => "U-203",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}
