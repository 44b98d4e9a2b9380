use core::fmt;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Interval, IntervalSet};

impl<'de> Deserialize<'de> for IntervalSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IntervalSetVisitor;

        impl<'de> Visitor<'de> for IntervalSetVisitor {
            type Value = IntervalSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of [location, size] intervals")
            }

            // every interval goes through `add`, so unsorted or overflowing input is accepted
            fn visit_seq<A>(self, mut seq: A) -> Result<IntervalSet, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut set = IntervalSet::new();
                while let Some(interval) = seq.next_element::<Interval>()? {
                    set.add(interval);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(IntervalSetVisitor)
    }
}

impl Serialize for IntervalSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries = self.normalized();
        let mut seq = serializer.serialize_seq(Some(entries.len()))?;
        for interval in entries.iter() {
            seq.serialize_element(interval)?;
        }
        seq.end()
    }
}
