use std::fmt;

/// One of the fixed key visual identifiers
///
/// `Kv1`..`Kv3` are the candidates offered after analysis,
/// `Kv4`..`Kv6` are alternates reachable only through edit keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogicalName {
    Kv1,
    Kv2,
    Kv3,
    Kv4,
    Kv5,
    Kv6,
}

impl LogicalName {
    /// The three candidate slots, in display order
    pub const CANDIDATES: [LogicalName; 3] = [LogicalName::Kv1, LogicalName::Kv2, LogicalName::Kv3];

    #[cfg(test)]
    pub const ALL: [LogicalName; 6] = [
        LogicalName::Kv1,
        LogicalName::Kv2,
        LogicalName::Kv3,
        LogicalName::Kv4,
        LogicalName::Kv5,
        LogicalName::Kv6,
    ];

    /// File basename as it appears on disk (before case variants)
    pub fn as_str(self) -> &'static str {
        match self {
            LogicalName::Kv1 => "KV1",
            LogicalName::Kv2 => "KV2",
            LogicalName::Kv3 => "KV3",
            LogicalName::Kv4 => "KV4",
            LogicalName::Kv5 => "KV5",
            LogicalName::Kv6 => "KV6",
        }
    }

    /// Portrait visuals whose display width is capped when shown large
    pub fn is_tall(self) -> bool {
        matches!(self, LogicalName::Kv5 | LogicalName::Kv6)
    }
}

impl fmt::Display for LogicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_kv5_and_kv6_are_tall() {
        let tall: Vec<_> = LogicalName::ALL.iter().filter(|n| n.is_tall()).collect();
        assert_eq!(tall, vec![&LogicalName::Kv5, &LogicalName::Kv6]);
    }

    #[test]
    fn test_display_matches_file_basename() {
        assert_eq!(LogicalName::Kv3.to_string(), "KV3");
        assert_eq!(LogicalName::CANDIDATES.map(LogicalName::as_str), ["KV1", "KV2", "KV3"]);
    }
}
