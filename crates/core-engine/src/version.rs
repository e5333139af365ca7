use crate::error::{EngineResult, VersionNotRecognizedSnafu};
use snafu::ensure;

/// Extracts a `(major, minor, patch)` triple from a loosely formatted server
/// version string such as `doris-2.1.11-rc01-97b77e6cda` or `8.0.32-log`.
///
/// The engine-name `prefix` (separator included) is stripped when present.
/// Each dot-separated segment contributes its leading run of digits; the rest
/// of the segment (`-rc01`, `-log`, trailing build hashes) is discarded.
/// Fewer than three numeric segments is a parse failure, never a partial or
/// zeroed triple.
pub fn parse_version_triple(raw: &str, prefix: &str) -> EngineResult<(u32, u32, u32)> {
    let stripped = raw.strip_prefix(prefix).unwrap_or(raw);

    let mut triple = [0_u32; 3];
    let mut segments = stripped.split('.');
    for slot in &mut triple {
        let segment = segments.next().unwrap_or("");
        let digits: String = segment.chars().take_while(char::is_ascii_digit).collect();
        ensure!(!digits.is_empty(), VersionNotRecognizedSnafu { raw });
        *slot = digits
            .parse()
            .ok()
            .ok_or_else(|| VersionNotRecognizedSnafu { raw }.build())?;
    }

    Ok((triple[0], triple[1], triple[2]))
}
