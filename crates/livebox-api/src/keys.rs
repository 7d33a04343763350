// Remote-control key table.
//
// Key codes are the appliance's IR scancodes, taken from the official
// remote. Names follow the labels printed on it (`VOL+`, `CH-`, ...).

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How a key press is delivered (operation `01`, `mode` parameter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyPressMode {
    /// Simple press-and-release.
    #[default]
    Single,
    /// Start of a long press.
    Long,
    /// Release after a long press.
    Release,
}

impl KeyPressMode {
    pub fn code(self) -> u8 {
        match self {
            Self::Single => 0,
            Self::Long => 1,
            Self::Release => 2,
        }
    }
}

/// A key on the Livebox Play remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteKey {
    Power,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    ChannelUp,
    ChannelDown,
    VolumeUp,
    VolumeDown,
    Mute,
    Up,
    Down,
    Left,
    Right,
    Ok,
    Back,
    Menu,
    PlayPause,
    FastForward,
    Rewind,
    Record,
    Vod,
}

/// (key, remote label, IR scancode)
const KEY_TABLE: &[(RemoteKey, &str, u16)] = &[
    (RemoteKey::Power, "POWER", 116),
    (RemoteKey::Digit0, "0", 512),
    (RemoteKey::Digit1, "1", 513),
    (RemoteKey::Digit2, "2", 514),
    (RemoteKey::Digit3, "3", 515),
    (RemoteKey::Digit4, "4", 516),
    (RemoteKey::Digit5, "5", 517),
    (RemoteKey::Digit6, "6", 518),
    (RemoteKey::Digit7, "7", 519),
    (RemoteKey::Digit8, "8", 520),
    (RemoteKey::Digit9, "9", 521),
    (RemoteKey::ChannelUp, "CH+", 402),
    (RemoteKey::ChannelDown, "CH-", 403),
    (RemoteKey::VolumeUp, "VOL+", 115),
    (RemoteKey::VolumeDown, "VOL-", 114),
    (RemoteKey::Mute, "MUTE", 113),
    (RemoteKey::Up, "UP", 103),
    (RemoteKey::Down, "DOWN", 108),
    (RemoteKey::Left, "LEFT", 105),
    (RemoteKey::Right, "RIGHT", 106),
    (RemoteKey::Ok, "OK", 352),
    (RemoteKey::Back, "BACK", 158),
    (RemoteKey::Menu, "MENU", 139),
    (RemoteKey::PlayPause, "PLAY/PAUSE", 164),
    (RemoteKey::FastForward, "FFWD", 159),
    (RemoteKey::Rewind, "FBWD", 168),
    (RemoteKey::Record, "REC", 167),
    (RemoteKey::Vod, "VOD", 393),
];

impl RemoteKey {
    /// The IR scancode sent on the wire.
    pub fn code(self) -> u16 {
        KEY_TABLE
            .iter()
            .find(|(key, _, _)| *key == self)
            .map(|(_, _, code)| *code)
            .unwrap_or_default()
    }

    /// The label printed on the physical remote.
    pub fn label(self) -> &'static str {
        KEY_TABLE
            .iter()
            .find(|(key, _, _)| *key == self)
            .map(|(_, label, _)| *label)
            .unwrap_or_default()
    }

    /// All known keys, in remote-layout order.
    pub fn all() -> impl Iterator<Item = RemoteKey> {
        KEY_TABLE.iter().map(|(key, _, _)| *key)
    }
}

impl fmt::Display for RemoteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RemoteKey {
    type Err = Error;

    /// Accepts a key label (case-insensitive) or a raw numeric scancode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if let Some((key, _, _)) = KEY_TABLE
            .iter()
            .find(|(_, label, _)| label.eq_ignore_ascii_case(wanted))
        {
            return Ok(*key);
        }
        if let Ok(code) = wanted.parse::<u16>() {
            if let Some((key, _, _)) = KEY_TABLE.iter().find(|(_, _, c)| *c == code) {
                return Ok(*key);
            }
        }
        Err(Error::UnknownKey(wanted.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_label_is_case_insensitive() {
        assert_eq!("power".parse::<RemoteKey>().ok(), Some(RemoteKey::Power));
        assert_eq!("vol+".parse::<RemoteKey>().ok(), Some(RemoteKey::VolumeUp));
        assert_eq!(
            "play/pause".parse::<RemoteKey>().ok(),
            Some(RemoteKey::PlayPause)
        );
    }

    #[test]
    fn lookup_by_scancode() {
        assert_eq!("116".parse::<RemoteKey>().ok(), Some(RemoteKey::Power));
        assert_eq!("352".parse::<RemoteKey>().ok(), Some(RemoteKey::Ok));
    }

    #[test]
    fn unknown_key_is_an_error() {
        assert!(matches!(
            "FROBNICATE".parse::<RemoteKey>(),
            Err(Error::UnknownKey(_))
        ));
    }

    #[test]
    fn every_key_has_a_code_and_label() {
        for key in RemoteKey::all() {
            assert_ne!(key.code(), 0, "{key:?} has no scancode");
            assert!(!key.label().is_empty(), "{key:?} has no label");
        }
    }
}
