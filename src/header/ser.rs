use serde::{Serialize, Serializer, ser::SerializeSeq};

use super::HeaderSet;

impl Serialize for HeaderSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.headers.len()))?;

        for header in &self.headers {
            seq.serialize_element(&(&header.name, &header.value))?;
        }
        seq.end()
    }
}
