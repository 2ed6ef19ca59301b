use std::cmp::Ordering;
use std::fmt;

/// Package version ordered by dot-separated segments.
///
/// Segments compare numerically when both sides are numeric and fall back
/// to lexicographic comparison otherwise, so `"1.10"` sorts above `"1.9"`
/// and `"2.0"` above `"1.9"`. A missing trailing segment sorts lower:
/// `"1.0"` < `"1.0.1"`. The raw string is kept for display.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Number(u64),
    Text(String),
}

impl Segment {
    fn parse(s: &str) -> Self {
        match s.parse::<u64>() {
            Ok(n) => Segment::Number(n),
            Err(_) => Segment::Text(s.to_string()),
        }
    }

    fn compare(&self, other: &Segment) -> Ordering {
        match (self, other) {
            (Segment::Number(a), Segment::Number(b)) => a.cmp(b),
            (Segment::Text(a), Segment::Text(b)) => a.cmp(b),
            // Mixed segments fall back to lexicographic comparison
            (Segment::Number(a), Segment::Text(b)) => a.to_string().as_str().cmp(b.as_str()),
            (Segment::Text(a), Segment::Number(b)) => a.as_str().cmp(b.to_string().as_str()),
        }
    }
}

impl Version {
    /// Parse a version string. Never fails: an empty or whitespace-only
    /// string is the version `"0"`, and non-numeric segments are kept as
    /// text for lexicographic comparison.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        let raw = if trimmed.is_empty() { "0" } else { trimmed };

        Self {
            raw: raw.to_string(),
            segments: raw.split('.').map(Segment::parse).collect(),
        }
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let ordering = match (self.segments.get(i), other.segments.get(i)) {
                (Some(a), Some(b)) => a.compare(b),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => Ordering::Equal,
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
