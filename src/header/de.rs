use serde::{Deserialize, Deserializer, de::Visitor};

use super::HeaderSet;

struct HeaderSetVisitor;

impl<'de> Visitor<'de> for HeaderSetVisitor {
    type Value = HeaderSet;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("sequence of name-value pairs with unique names")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = HeaderSet::new();

        while let Some((name, value)) = seq.next_element::<(String, String)>()? {
            set.add(name, value).map_err(serde::de::Error::custom)?;
        }

        Ok(set)
    }
}

impl<'de> Deserialize<'de> for HeaderSet {
    fn deserialize<D>(deserializer: D) -> Result<HeaderSet, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(HeaderSetVisitor)
    }
}
