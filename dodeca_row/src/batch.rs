// Parallel analysis of many rows (an anthology, a corpus survey).
//
// Each row is analysed independently on the rayon pool; the only shared
// state is the descriptor cache, whose entries are idempotent. Results come
// back in input order, one `Result` per row, so one bad row doesn't hide the
// others.

use crate::config::AnalysisConfig;
use crate::report::{RowReport, analyse_row};
use crate::row::Row;
use dodeca_pcset::{DescriptorCache, Result};
use rayon::prelude::*;

pub fn analyse_rows(rows: &[Row], config: &AnalysisConfig) -> Vec<Result<RowReport>> {
    let cache = DescriptorCache::new();
    analyse_rows_with(rows, config, &cache)
}

/// As `analyse_rows`, sharing a caller-owned cache across batches.
pub fn analyse_rows_with(
    rows: &[Row],
    config: &AnalysisConfig,
    cache: &DescriptorCache,
) -> Vec<Result<RowReport>> {
    tracing::debug!(rows = rows.len(), "analysing batch");
    rows.par_iter()
        .map(|row| analyse_row(row, config, cache))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_preserves_order_and_errors() {
        let rows = vec![
            Row::chromatic(),
            Row::new(&[0, 1, 2]).unwrap(),
            Row::new(&[0, 11, 7, 4, 2, 9, 3, 8, 10, 1, 5, 6]).unwrap(),
        ];
        let reports = analyse_rows(&rows, &AnalysisConfig::default());
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].as_ref().unwrap().summary, "T6; I11; RI5");
        assert!(reports[1].is_err());
        assert_eq!(reports[2].as_ref().unwrap().summary, "T6; I5; RI11");
    }

    #[test]
    fn test_batch_matches_sequential() {
        let rows: Vec<Row> = (0..12).map(|n| Row::chromatic().rotate(n)).collect();
        let config = AnalysisConfig::default();
        let cache = DescriptorCache::new();
        let parallel = analyse_rows_with(&rows, &config, &cache);
        for (row, report) in rows.iter().zip(parallel) {
            let sequential = analyse_row(row, &config, &DescriptorCache::new()).unwrap();
            assert_eq!(report.unwrap(), sequential);
        }
        assert!(!cache.is_empty());
    }
}
