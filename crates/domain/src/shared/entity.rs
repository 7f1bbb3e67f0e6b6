use almanac_utils::{create_random_secret, RandomSourceError, ALPHABET};
use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

pub trait Entity {
    fn id(&self) -> &ID;
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Length of the public label that identifies a `User`, `Calendar` or
/// `CalendarEvent`. The label doubles as primary key in storage.
pub const LABEL_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ID(String);

impl ID {
    /// Generates a fresh random label. No uniqueness check is performed,
    /// collisions across the 32^8 space are an accepted gap.
    pub fn random() -> Result<Self, RandomSourceError> {
        create_random_secret(LABEL_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn inner(self) -> String {
        self.0
    }
}

impl Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug)]
pub enum InvalidIDError {
    #[error("ID: {0} is malformed")]
    Malformed(String),
}

impl FromStr for ID {
    type Err = InvalidIDError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = s.len() == LABEL_LEN && s.bytes().all(|b| ALPHABET.contains(&b));
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidIDError::Malformed(s.to_string()))
        }
    }
}

impl Serialize for ID {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ID {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IDVisitor;

        impl<'de> Visitor<'de> for IDVisitor {
            type Value = ID;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A valid string id representation")
            }

            fn visit_str<E>(self, value: &str) -> Result<ID, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<ID>()
                    .map_err(|_| E::custom(format!("Malformed id: {}", value)))
            }
        }

        deserializer.deserialize_str(IDVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn generates_parseable_labels() {
        let id = ID::random().unwrap();
        assert_eq!(id.as_str().len(), LABEL_LEN);
        assert_eq!(id.as_str().parse::<ID>().unwrap(), id);
    }

    #[test]
    fn rejects_malformed_labels() {
        for bad in &["", "short", "waytoolonglabel", "abcdefg0", "ABCDEFGH"] {
            assert!(bad.parse::<ID>().is_err());
        }
    }
}
