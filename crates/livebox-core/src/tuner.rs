// Tuning command wire format.
//
// The firmware expects the EPG identifier in a fixed 10-character field,
// left-padded with `*`. A malformed identifier is ignored silently (no
// error comes back), so the padding here must be reproduced exactly.

use std::fmt;

/// Width of the EPG identifier field on the wire.
pub const TUNE_ID_WIDTH: usize = 10;
/// Filler character for short identifiers.
pub const TUNE_FILLER: char = '*';

/// A ready-to-send tuning parameter: exactly 10 chars, `*`-padded.
///
/// Must be transmitted as a pre-encoded query component -- percent-escaping
/// the filler breaks tuning (see `RemoteClient::tune`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuneCommand(String);

impl TuneCommand {
    /// Build the wire form of an EPG identifier.
    ///
    /// `epg_id` is trusted to come from a successful resolution;
    /// identifiers longer than 10 chars are a caller contract violation.
    pub fn build(epg_id: &str) -> Self {
        debug_assert!(
            epg_id.len() <= TUNE_ID_WIDTH,
            "EPG identifiers are at most {TUNE_ID_WIDTH} chars, got {epg_id:?}"
        );
        let mut wire = String::with_capacity(TUNE_ID_WIDTH);
        for _ in epg_id.len()..TUNE_ID_WIDTH {
            wire.push(TUNE_FILLER);
        }
        wire.push_str(epg_id);
        Self(wire)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TuneCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_ids_are_star_padded() {
        assert_eq!(TuneCommand::build("42").as_str(), "********42");
        assert_eq!(TuneCommand::build("201").as_str(), "*******201");
    }

    #[test]
    fn full_width_ids_pass_through() {
        assert_eq!(TuneCommand::build("1234567890").as_str(), "1234567890");
    }

    #[test]
    fn wire_form_is_always_ten_chars_ending_in_the_id() {
        for id in ["0", "42", "192", "999999999"] {
            let cmd = TuneCommand::build(id);
            assert_eq!(cmd.as_str().len(), TUNE_ID_WIDTH);
            assert!(cmd.as_str().ends_with(id));
        }
    }
}
