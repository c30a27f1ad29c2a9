use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use super::error::StudioError;

/// 128-bit identifier of a bank, event or mixer strip (`FMOD_GUID`).
///
/// Layout matches the native struct exactly; the native side reads and writes
/// it in place.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    pub fn is_nil(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_uuid(self) -> Uuid {
        Uuid::from_fields(self.data1, self.data2, self.data3, &self.data4)
    }
}

impl From<Uuid> for Guid {
    fn from(uuid: Uuid) -> Self {
        let (data1, data2, data3, data4) = uuid.as_fields();
        Self {
            data1,
            data2,
            data3,
            data4: *data4,
        }
    }
}

/// Formats as `{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}`, the form Studio tools export.
impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uuid().braced())
    }
}

/// Parses braced, hyphenated or simple GUID text without touching the native side.
impl FromStr for Guid {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Guid::from)
            .map_err(|e| StudioError::InvalidId(format!("{}: {}", s, e)))
    }
}

impl Serialize for Guid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Guid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "{0f8b4f5c-2e65-4d3a-9b6e-8c2d1a0b7f31}";

    #[test]
    fn layout_matches_native() {
        assert_eq!(std::mem::size_of::<Guid>(), 16);
        assert_eq!(std::mem::align_of::<Guid>(), 4);
    }

    #[test]
    fn parses_braced_text() {
        let guid: Guid = TEXT.parse().unwrap();
        assert_eq!(guid.data1, 0x0f8b_4f5c);
        assert_eq!(guid.data2, 0x2e65);
        assert_eq!(guid.data3, 0x4d3a);
        assert_eq!(guid.data4, [0x9b, 0x6e, 0x8c, 0x2d, 0x1a, 0x0b, 0x7f, 0x31]);
    }

    #[test]
    fn display_uses_braced_form() {
        let guid: Guid = TEXT.parse().unwrap();
        assert_eq!(guid.to_string(), TEXT);
    }

    #[test]
    fn rejects_garbage() {
        let err = "not-a-guid".parse::<Guid>().unwrap_err();
        assert!(matches!(err, StudioError::InvalidId(_)));
    }

    #[test]
    fn serializes_as_string() {
        let guid: Guid = TEXT.parse().unwrap();
        let json = serde_json::to_string(&guid).unwrap();
        assert_eq!(json, format!("\"{}\"", TEXT));
        let back: Guid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, guid);
    }

    #[test]
    fn default_is_nil() {
        assert!(Guid::default().is_nil());
        assert!(!TEXT.parse::<Guid>().unwrap().is_nil());
    }
}
