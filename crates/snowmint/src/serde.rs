use crate::SnowflakeId;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

/// Serializes as the ID's signed 64-bit value.
impl Serialize for SnowflakeId {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_i64(self.to_i64())
    }
}

/// Deserializes from a signed 64-bit value, rejecting negative numbers since
/// they set the reserved bit.
impl<'de> Deserialize<'de> for SnowflakeId {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(d)?;
        let raw = u64::try_from(raw)
            .map_err(|_| D::Error::custom(format_args!("snowflake id {raw} is negative")))?;
        Ok(Self::from_raw(raw))
    }
}
