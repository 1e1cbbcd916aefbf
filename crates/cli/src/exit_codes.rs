//! CLI Exit Code Registry
//!
//! Single source of truth for all CLI exit codes. Exit codes are part of
//! the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range | Domain    | Description                               |
//! |-------|-----------|-------------------------------------------|
//! | 0     | Universal | Success / lists fully consistent          |
//! | 1     | Universal | Discrepancies or unmatched names found    |
//! | 2     | Universal | CLI usage error (bad args, missing file)  |
//! | 3-9   | align     | Alignment-specific codes                  |

/// Success - the two lists aligned with no discrepancies.
pub const EXIT_SUCCESS: u8 = 0;

/// Discrepant or unmatched names found.
/// Like `diff(1)`, exit 1 means "the lists differ."
pub const EXIT_ALIGN_DISCREPANT: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// Config file failed to parse or validate.
pub const EXIT_ALIGN_INVALID_CONFIG: u8 = 3;

/// Runtime failure - unreadable workbook, ingestion error, write failure.
pub const EXIT_ALIGN_RUNTIME: u8 = 4;
