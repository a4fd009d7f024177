use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named host styles, e.g. `"header": "bold white on blue"`
///
/// These only dress the host regions (filter bar, list background, modal,
/// status bar). Preview cards draw with their own styles.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    pub fn get_or_default(&self, name: &str) -> Style {
        self.0.get(name).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, raw)| {
                parse_style(&raw)
                    .map(|style| (name, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Styles(styles))
    }
}

/// Parse `"[modifiers] [fg] [on bg]"`, e.g. `"bold yellow on black"`.
pub fn parse_style(raw: &str) -> Result<Style, String> {
    let mut style = Style::default();
    let mut words = raw.split_whitespace();

    while let Some(word) = words.next() {
        let lower = word.to_ascii_lowercase();
        match lower.as_str() {
            "on" => {
                let bg = words
                    .next()
                    .ok_or_else(|| format!("Missing background color in `{raw}`"))?;
                style = style.bg(parse_color(bg)?);
            }
            "bold" => style = style.add_modifier(Modifier::BOLD),
            "dim" => style = style.add_modifier(Modifier::DIM),
            "italic" => style = style.add_modifier(Modifier::ITALIC),
            "underlined" => style = style.add_modifier(Modifier::UNDERLINED),
            "reversed" => style = style.add_modifier(Modifier::REVERSED),
            _ => style = style.fg(parse_color(word)?),
        }
    }

    Ok(style)
}

fn parse_color(raw: &str) -> Result<Color, String> {
    Color::from_str(raw).map_err(|_| format!("Unknown color `{raw}`"))
}
