use core::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Interval;

impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IntervalVisitor;

        impl<'de> Visitor<'de> for IntervalVisitor {
            type Value = Interval;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an interval as a [location, size] pair")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Interval, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let location = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let size = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(1, &self))?;

                // self-describing formats hand us the whole array, reject extra elements
                let mut extra = 0;
                while seq.next_element::<de::IgnoredAny>()?.is_some() {
                    extra += 1;
                }
                if extra > 0 {
                    return Err(de::Error::invalid_length(2 + extra, &self));
                }

                Ok(Interval::new(location, size))
            }
        }

        deserializer.deserialize_tuple(2, IntervalVisitor)
    }
}

impl Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.location)?;
        tuple.serialize_element(&self.size)?;
        tuple.end()
    }
}
