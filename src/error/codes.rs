/// Error code registry for remote-result
///
/// Error codes are organized by category:
/// - 1000-1999: State access errors
/// - 2000-2999: Application errors
/// - 3000-3999: Configuration errors
///
/// The `*_GENERIC` codes head each range and are kept for callers that report
/// their own errors in the same scheme.
#[allow(dead_code)]
pub struct ErrorCode;

impl ErrorCode {
    // State access errors (1000-1999)
    pub const STATE_GENERIC: u16 = 1000;
    pub const STATE_NOT_SUCCESS: u16 = 1001;
    pub const STATE_CONTRACT_VIOLATION: u16 = 1002;

    // Application errors (2000-2999)
    pub const APPLY_GENERIC: u16 = 2000;
    pub const APPLY_NOT_CALLABLE: u16 = 2001;
    pub const APPLY_PAYLOAD_TYPE: u16 = 2002;

    // Configuration errors (3000-3999)
    pub const CONFIG_GENERIC: u16 = 3000;
    pub const CONFIG_INVALID_PRIORITY: u16 = 3001;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // State access errors
        1000 => "Generic state access error",
        1001 => "Value was requested from a result that is not in Success state",
        1002 => "Operation was invoked on a state it does not accept",

        // Application errors
        2000 => "Generic application error",
        2001 => "Neither operand holds a callable payload",
        2002 => "Argument payload has an unexpected type",

        // Configuration errors
        3000 => "Generic configuration error",
        3001 => "Unknown merge priority",

        _ => "Unknown error code",
    }
}
