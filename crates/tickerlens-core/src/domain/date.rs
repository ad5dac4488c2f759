use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::macros::format_description;
use time::Date;

use crate::ValidationError;

/// Calendar date carried by chart points, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate(Date);

const ISO_DATE: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

impl IsoDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let parsed = Date::parse(input, ISO_DATE).map_err(|_| ValidationError::InvalidDate {
            value: input.to_owned(),
        })?;

        Ok(Self(parsed))
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(ISO_DATE)
            .expect("IsoDate must be formattable as YYYY-MM-DD")
    }
}

impl From<Date> for IsoDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl Display for IsoDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for IsoDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for IsoDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
