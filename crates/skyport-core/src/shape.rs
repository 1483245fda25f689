//! Serde helpers for wire shapes.
//!
//! Structures are plain serde derives with `PascalCase` names and
//! `skip_serializing_if = "Option::is_none"` on every field. The helpers here
//! cover the cases derives do not handle on their own:
//!
//! - [`epoch_seconds`]: timestamps travel as seconds since the epoch.
//! - [`dense_list`]: `null` entries inside a list are dropped.
//! - [`dense_map`]: keys whose value is `null` are dropped.
//! - [`string_enum!`](crate::string_enum): string enums that keep unknown values.

use chrono::{DateTime, Utc};

/// Convert a timestamp to whole epoch seconds, rounding milliseconds.
#[must_use]
pub fn to_epoch_seconds(value: &DateTime<Utc>) -> i64 {
    let millis = value.timestamp_millis();
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let seconds = (millis as f64 / 1000.0).round() as i64;
    seconds
}

/// Convert fractional epoch seconds to a timestamp with millisecond precision.
#[must_use]
pub fn from_epoch_seconds(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let millis = (value * 1000.0).round() as i64;
    DateTime::from_timestamp_millis(millis)
}

/// `Option<DateTime<Utc>>` as epoch seconds.
///
/// Use with `#[serde(default, with = "skyport_core::shape::epoch_seconds")]`.
pub mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as an integer number of seconds.
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_i64(super::to_epoch_seconds(ts)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize from a (possibly fractional) number of seconds.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<f64>::deserialize(deserializer)? {
            Some(seconds) => super::from_epoch_seconds(seconds)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {seconds}"))),
            None => Ok(None),
        }
    }
}

/// `Option<Vec<T>>` that drops `null` entries when deserializing.
///
/// Use with `#[serde(default, deserialize_with = "skyport_core::shape::dense_list::deserialize")]`.
pub mod dense_list {
    use serde::{Deserialize, Deserializer};

    /// Deserialize a list, skipping `null` elements.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        let raw: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
        Ok(raw.map(|items| items.into_iter().flatten().collect()))
    }
}

/// `Option<BTreeMap<K, V>>` that drops keys whose value is `null`.
///
/// Use with `#[serde(default, deserialize_with = "skyport_core::shape::dense_map::deserialize")]`.
pub mod dense_map {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer};

    /// Deserialize a map, skipping entries with a `null` value.
    pub fn deserialize<'de, D, K, V>(deserializer: D) -> Result<Option<BTreeMap<K, V>>, D::Error>
    where
        D: Deserializer<'de>,
        K: Deserialize<'de> + Ord,
        V: Deserialize<'de>,
    {
        let raw: Option<BTreeMap<K, Option<V>>> = Option::deserialize(deserializer)?;
        Ok(raw.map(|entries| {
            entries
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v)))
                .collect()
        }))
    }
}

/// Define a string enum that round-trips unknown values.
///
/// Each variant maps to its wire string; anything else deserializes into
/// `Unknown(String)` instead of failing.
///
/// # Examples
///
/// ```
/// skyport_core::string_enum! {
///     /// Volume type.
///     pub enum VolumeType {
///         /// General purpose SSD.
///         Gp2 => "gp2",
///         /// Magnetic.
///         Standard => "standard",
///     }
/// }
///
/// assert_eq!(VolumeType::from("gp2"), VolumeType::Gp2);
/// assert_eq!(VolumeType::from("io9").as_str(), "io9");
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value not known to this version of the client.
            Unknown(String),
        }

        impl $name {
            /// Returns the wire-format string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            /// All known values.
            #[must_use]
            pub fn values() -> &'static [&'static str] {
                &[$($wire),+]
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($wire => Self::$variant,)+
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S: $crate::__serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D: $crate::__serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let value = <::std::string::String as $crate::__serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Ok(Self::from(value.as_str()))
            }
        }
    };
}
