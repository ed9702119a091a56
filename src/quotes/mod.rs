//! Quote domain types and the two retrieval flows.

pub mod advice;
pub mod daily;
pub mod state;

pub use advice::{AdviceClient, AdviceSlip};
pub use daily::{DailyGenerator, DailyQuoteService, today_key};
pub use state::{FetchPhase, FetchSequence};

use serde::{Deserialize, Serialize};

/// A generated quote pair. Field names match the wire format (`{en, my}`)
/// used by both the generation prompt and the HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyQuote {
    pub en: String,
    pub my: String,
}

/// The single persisted daily-quote slot.
///
/// Valid only while `date_key` equals the current calendar date; there is no
/// TTL beyond that, and each write overwrites the previous entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyEntry {
    pub date_key: String,
    pub english: String,
    pub myanmar: String,
}

impl DailyEntry {
    pub fn new(date_key: &str, quote: &DailyQuote) -> Self {
        Self {
            date_key: date_key.to_string(),
            english: quote.en.clone(),
            myanmar: quote.my.clone(),
        }
    }

    /// Freshness is a plain string comparison against the given date key,
    /// deliberately independent of storage I/O.
    pub fn is_valid_for(&self, date_key: &str) -> bool {
        self.date_key == date_key
    }

    pub fn quote(&self) -> DailyQuote {
        DailyQuote {
            en: self.english.clone(),
            my: self.myanmar.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn quote() -> DailyQuote {
        DailyQuote {
            en: "Stay curious.".to_string(),
            my: "စူးစမ်းလိုစိတ်ရှိပါ".to_string(),
        }
    }

    #[test]
    fn test_entry_valid_on_matching_date() {
        let entry = DailyEntry::new("2026-08-06", &quote());
        assert!(entry.is_valid_for("2026-08-06"));
    }

    #[test]
    fn test_entry_stale_on_other_date() {
        let entry = DailyEntry::new("2026-08-06", &quote());
        assert!(!entry.is_valid_for("2026-08-07"));
        assert!(!entry.is_valid_for("2026-08-05"));
    }

    #[test]
    fn test_entry_round_trips_quote() {
        let entry = DailyEntry::new("2026-08-06", &quote());
        assert_eq!(entry.quote(), quote());
    }

    #[test]
    fn test_daily_quote_wire_field_names() {
        let json = serde_json::to_value(quote()).unwrap();
        assert_eq!(json["en"], "Stay curious.");
        assert_eq!(json["my"], "စူးစမ်းလိုစိတ်ရှိပါ");
    }
}
