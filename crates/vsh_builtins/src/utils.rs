use vsh_core::command::CommandResult;

use crate::status;

/// Converts a [`clap::Error`] into a command result.
///
/// Clap returns help and version messages as errors, so this function
/// routes output accordingly: requested help goes to stdout with a zero
/// exit code, while actual usage errors go to stderr.
pub(crate) fn exit_with_parse_error(error: clap::Error) -> CommandResult {
    let rendered = error.render().to_string();
    if error.use_stderr() {
        CommandResult::error(status::BUILTIN_ERROR, rendered)
    } else {
        CommandResult::success(rendered)
    }
}

/// Strips one pair of matching surrounding quotes from a value.
///
/// Values assigned with embedded quotes, such as `ll='ls -l'`, reach the
/// builtin with the quote characters preserved inside the word.
pub(crate) fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'\'' || first == b'"') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
