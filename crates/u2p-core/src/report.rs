//! Run statistics and the end-of-run summary.

use crate::render::RenderError;

/// Outcome buckets for one batch run. The buckets are disjoint and each
/// preserves input order. Observational only; never persisted.
#[derive(Debug, Default)]
pub struct RunStats {
    /// URLs converted during this run.
    pub downloaded: Vec<String>,
    /// URLs skipped because the ledger already had them.
    pub cached: Vec<String>,
    /// URLs that failed, with the classified failure.
    pub failed: Vec<(String, RenderError)>,
}

impl RunStats {
    pub fn total(&self) -> usize {
        self.downloaded.len() + self.cached.len() + self.failed.len()
    }

    /// Renders the human-readable summary: counts for downloaded and
    /// cached, and each failed URL with its failure kind.
    pub fn summary(&self) -> String {
        let mut out = String::from("Done.\n");
        out.push_str(&format!("* Downloaded: {}\n", self.downloaded.len()));
        out.push_str(&format!(
            "* Cached and not downloaded: {}\n",
            self.cached.len()
        ));
        out.push_str(&format!("* Failed: {}\n", self.failed.len()));
        for (url, err) in &self.failed {
            out.push_str(&format!("  - {} ({})\n", url, err));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run() {
        let stats = RunStats::default();
        assert_eq!(stats.total(), 0);
        let summary = stats.summary();
        assert!(summary.contains("* Downloaded: 0"));
        assert!(summary.contains("* Cached and not downloaded: 0"));
        assert!(summary.contains("* Failed: 0"));
    }

    #[test]
    fn failed_urls_are_listed_with_reasons() {
        let mut stats = RunStats::default();
        stats.downloaded.push("http://a.test/x".to_string());
        stats.cached.push("http://b.test/y".to_string());
        stats.failed.push((
            "http://c.test/z".to_string(),
            RenderError::Probe(crate::probe::ProbeError::Http(404)),
        ));

        assert_eq!(stats.total(), 3);
        let summary = stats.summary();
        assert!(summary.contains("* Downloaded: 1"));
        assert!(summary.contains("* Failed: 1"));
        assert!(summary.contains("http://c.test/z"));
        assert!(summary.contains("HTTP 404"));
    }
}
