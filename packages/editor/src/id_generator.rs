use std::collections::HashSet;

/// Sequential placeholder ids for blips and waves created locally.
///
/// The remote side substitutes real ids when it applies the operations.
/// Ids are `prefix` + counter; any candidate already present in the
/// snapshot is skipped, so every id handed out is unique within the bundle.
#[derive(Debug, Clone)]
pub struct PlaceholderIds {
    prefix: String,
    count: u64,
    taken: HashSet<String>,
}

impl PlaceholderIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_reserved(prefix, HashSet::new())
    }

    /// Generator that will never return any of `reserved`
    pub fn with_reserved(prefix: impl Into<String>, reserved: HashSet<String>) -> Self {
        Self {
            prefix: prefix.into(),
            count: 0,
            taken: reserved,
        }
    }

    /// Generate next placeholder id
    pub fn new_id(&mut self) -> String {
        loop {
            self.count += 1;
            let id = format!("{}{}", self.prefix, self.count);
            if self.taken.insert(id.clone()) {
                return id;
            }
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of ids generated so far, skipped candidates included
    pub fn count(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = PlaceholderIds::new("TBD_");

        assert_eq!(ids.new_id(), "TBD_1");
        assert_eq!(ids.new_id(), "TBD_2");
        assert_eq!(ids.new_id(), "TBD_3");
        assert_eq!(ids.prefix(), "TBD_");
    }

    #[test]
    fn test_reserved_ids_are_skipped() {
        let reserved: HashSet<String> = ["TBD_1", "TBD_3"].iter().map(|s| s.to_string()).collect();
        let mut ids = PlaceholderIds::with_reserved("TBD_", reserved);

        assert_eq!(ids.new_id(), "TBD_2");
        assert_eq!(ids.new_id(), "TBD_4");
        assert_eq!(ids.count(), 4);
    }
}
