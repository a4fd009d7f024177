use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

/// User-bindable actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    Quit,
    Suspend,
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    NextGenre,
    PreviousGenre,
    NextSortOrder,
    OpenDetail,
    CloseDetail,
}

/// Flat key sequence → action mapping
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl KeyBindings {
    /// Look up a single key press, ignoring event kind and state flags.
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        let normalized = KeyEvent::new(key.code, key.modifiers);
        self.0.get(&vec![normalized]).copied()
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_sequence(&key_str)
                    .map(|seq| (seq, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

/// Parse a single key such as `q`, `Ctrl-c`, `Shift-g` or `Enter`.
pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let mut modifiers = KeyModifiers::empty();
    let mut rest = raw;

    loop {
        let lower = rest.to_ascii_lowercase();
        if lower.starts_with("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            rest = &rest[5..];
        } else if lower.starts_with("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            rest = &rest[4..];
        } else if lower.starts_with("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            rest = &rest[6..];
        } else {
            break;
        }
    }

    let code = parse_key_code(rest, &mut modifiers)?;
    Ok(KeyEvent::new(code, modifiers))
}

fn parse_key_code(raw: &str, modifiers: &mut KeyModifiers) -> Result<KeyCode, String> {
    let code = match raw.to_ascii_lowercase().as_str() {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        f if f.len() > 1 && f.starts_with('f') => f[1..]
            .parse::<u8>()
            .map(KeyCode::F)
            .map_err(|_| format!("Unable to parse `{raw}`"))?,
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    let c = if modifiers.contains(KeyModifiers::SHIFT) {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    };
                    if c.is_ascii_uppercase() {
                        modifiers.insert(KeyModifiers::SHIFT);
                    }
                    KeyCode::Char(c)
                }
                _ => return Err(format!("Unable to parse `{raw}`")),
            }
        }
    };
    Ok(code)
}

/// Parse a key sequence such as `<q>` or `<g><g>`.
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    let opens = raw.chars().filter(|c| *c == '<').count();
    let closes = raw.chars().filter(|c| *c == '>').count();
    if opens == 0 || opens != closes {
        return Err(format!("Unable to parse `{raw}`"));
    }

    let inner = raw
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| format!("Unable to parse `{raw}`"))?;

    inner.split("><").map(parse_key_event).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("q", KeyCode::Char('q'), KeyModifiers::NONE)]
    #[case("Ctrl-c", KeyCode::Char('c'), KeyModifiers::CONTROL)]
    #[case("ctrl-z", KeyCode::Char('z'), KeyModifiers::CONTROL)]
    #[case("G", KeyCode::Char('G'), KeyModifiers::SHIFT)]
    #[case("Shift-g", KeyCode::Char('G'), KeyModifiers::SHIFT)]
    #[case("Enter", KeyCode::Enter, KeyModifiers::NONE)]
    #[case("esc", KeyCode::Esc, KeyModifiers::NONE)]
    #[case("F5", KeyCode::F(5), KeyModifiers::NONE)]
    #[case("space", KeyCode::Char(' '), KeyModifiers::NONE)]
    fn test_parse_key_event(
        #[case] raw: &str,
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
    ) {
        assert_eq!(parse_key_event(raw), Ok(KeyEvent::new(code, modifiers)));
    }

    #[test]
    fn test_parse_key_event_invalid() {
        assert!(parse_key_event("notakey").is_err());
        assert!(parse_key_event("Ctrl-").is_err());
    }

    #[test]
    fn test_parse_key_sequence() {
        assert_eq!(
            parse_key_sequence("<q>"),
            Ok(vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)])
        );
        assert_eq!(
            parse_key_sequence("<g><g>"),
            Ok(vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            ])
        );
        assert!(parse_key_sequence("q").is_err());
        assert!(parse_key_sequence("<q").is_err());
    }

    #[test]
    fn test_deserialize_keybindings() -> Result<(), json5::Error> {
        let bindings: KeyBindings =
            json5::from_str(r#"{ "<q>": "Quit", "<Enter>": "OpenDetail", "<Shift-f>": "PreviousGenre" }"#)?;

        assert_eq!(bindings.len(), 3);
        assert_eq!(
            bindings.action_for(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::OpenDetail)
        );
        assert_eq!(
            bindings.action_for(&KeyEvent::new(KeyCode::Char('F'), KeyModifiers::SHIFT)),
            Some(Action::PreviousGenre)
        );
        Ok(())
    }

    #[test]
    fn test_deserialize_keybindings_rejects_bad_key() {
        let result = json5::from_str::<KeyBindings>(r#"{ "<nope>": "Quit" }"#);
        assert!(result.is_err());
    }
}
