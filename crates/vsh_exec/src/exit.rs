/// Exit code indicating success.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors.
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code for unresolved command names.
pub const EXIT_COMMAND_NOT_FOUND: i32 = 127;

/// Exit code for commands aborted by a user interrupt.
pub const EXIT_INTERRUPTED: i32 = 130;
