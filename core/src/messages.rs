use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

use crate::*;

/// Identifier of every player-visible string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageId {
    ButtonNum,
    Go,
    Winner,
    Loser,
    CorrectOrder,
    PlayAgain,
    Limits,
}

impl MessageId {
    pub const ALL: [Self; 7] = [
        Self::ButtonNum,
        Self::Go,
        Self::Winner,
        Self::Loser,
        Self::CorrectOrder,
        Self::PlayAgain,
        Self::Limits,
    ];

    /// Key used in JSON message tables.
    pub const fn key(self) -> &'static str {
        use MessageId::*;
        match self {
            ButtonNum => "buttonNum",
            Go => "go",
            Winner => "winner",
            Loser => "loser",
            CorrectOrder => "correctOrder",
            PlayAgain => "playAgain",
            Limits => "limits",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

/// Localized message table handed to the controller and the views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    table: BTreeMap<MessageId, String>,
}

impl Messages {
    pub const ENGLISH_JSON: &'static str = include_str!("../lang/en.json");

    /// Tables compiled into the crate, by language tag.
    pub const BUNDLED: &'static [(&'static str, &'static str)] = &[("en", Self::ENGLISH_JSON)];

    /// The bundled English table. A missing message renders as its key.
    pub fn english() -> Self {
        let table = parse_table(Self::ENGLISH_JSON).unwrap_or_else(|err| {
            log::error!("bundled English messages are invalid: {}", err);
            BTreeMap::new()
        });
        Self { table }
    }

    /// Loads a table keyed by [`MessageId::key`]. Missing keys keep their English text.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut messages = Self::english();
        messages.table.extend(parse_table(json)?);
        Ok(messages)
    }

    /// Message table for a language tag, falling back to English for unknown languages.
    pub fn for_language(lang: &str) -> Self {
        let Some(&(_, json)) = Self::BUNDLED.iter().find(|(tag, _)| *tag == lang) else {
            log::warn!("no message table for language {:?}, using English", lang);
            return Self::english();
        };

        Self::from_json(json).unwrap_or_else(|err| {
            log::warn!("message table for {:?} is invalid ({}), using English", lang, err);
            Self::english()
        })
    }

    pub fn set(&mut self, id: MessageId, text: impl Into<String>) {
        self.table.insert(id, text.into());
    }

    pub fn get(&self, id: MessageId) -> &str {
        self.table.get(&id).map_or_else(|| id.key(), String::as_str)
    }
}

fn parse_table(json: &str) -> Result<BTreeMap<MessageId, String>> {
    let raw: BTreeMap<String, String> =
        serde_json::from_str(json).map_err(|err| GameError::InvalidMessages(err.to_string()))?;

    let mut table = BTreeMap::new();
    for (key, text) in raw {
        match MessageId::from_key(&key) {
            Some(id) => {
                table.insert(id, text);
            }
            None => log::warn!("ignoring unknown message key: {:?}", key),
        }
    }
    Ok(table)
}

impl Default for Messages {
    fn default() -> Self {
        Self::english()
    }
}
