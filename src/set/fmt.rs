use core::fmt;

use crate::IntervalSet;

impl fmt::Debug for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.normalized();
        match (entries.first(), entries.last()) {
            (Some(first), Some(last)) if entries.len() >= 16 => write!(
                f,
                "IntervalSet<{:?} intervals between {} and {}>",
                entries.len(),
                first.start(),
                last.end()
            ),
            _ => write!(f, "IntervalSet<{:?}>", &*entries),
        }
    }
}
