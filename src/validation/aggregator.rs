use super::finding::Finding;

/// Collect-all merge policy: findings from every validator are combined,
/// sorted (fatal first, then dotted path, then kind) and de-duplicated on
/// exact `(path, kind)` pairs. The result is stable across runs for
/// identical input.
pub struct ErrorAggregator {
    findings: Vec<Finding>,
}

impl ErrorAggregator {
    pub fn new() -> Self {
        Self {
            findings: Vec::new(),
        }
    }

    pub fn extend(&mut self, findings: Vec<Finding>) {
        self.findings.extend(findings);
    }

    pub fn finish(mut self) -> Vec<Finding> {
        self.findings.sort_by(|a, b| {
            a.severity
                .cmp(&b.severity)
                .then_with(|| a.path.cmp(&b.path))
                .then_with(|| a.kind.cmp(&b.kind))
                .then_with(|| a.message.cmp(&b.message))
        });
        // Keep the first occurrence of each (path, kind) pair; fatals sort
        // first, so a fatal always wins over a warning at the same spot.
        let mut seen = std::collections::HashSet::new();
        self.findings
            .retain(|f| seen.insert((f.path.clone(), f.kind)));
        self.findings
    }
}

impl Default for ErrorAggregator {
    fn default() -> Self {
        Self::new()
    }
}
