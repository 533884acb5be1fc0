use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Stored best score together with when it was set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestScoreRecord {
    pub guess_count: u32,
    pub achieved_at: DateTime<Utc>,
}

impl BestScoreRecord {
    /// Build from a raw row. Negative or oversized counts are rejected as corrupt.
    pub fn from_row(guesses: i64, achieved_at: &str) -> Result<Self> {
        let guess_count = u32::try_from(guesses)
            .with_context(|| format!("Corrupt best score value: {}", guesses))?;

        let achieved_at = DateTime::parse_from_rfc3339(achieved_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(Self {
            guess_count,
            achieved_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row_valid() {
        let record = BestScoreRecord::from_row(7, "2026-01-02T03:04:05+00:00").unwrap();
        assert_eq!(record.guess_count, 7);
        assert_eq!(record.achieved_at.to_rfc3339(), "2026-01-02T03:04:05+00:00");
    }

    #[test]
    fn test_from_row_rejects_negative() {
        assert!(BestScoreRecord::from_row(-1, "2026-01-02T03:04:05+00:00").is_err());
    }

    #[test]
    fn test_from_row_tolerates_bad_timestamp() {
        let record = BestScoreRecord::from_row(3, "yesterday").unwrap();
        assert_eq!(record.guess_count, 3);
    }
}
