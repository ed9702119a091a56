//! Terminal rendering of quote cards.

use crate::quotes::{AdviceSlip, DailyQuote};

use super::Style;

const CARD_WIDTH: usize = 44;

fn divider() -> String {
    "─".repeat(CARD_WIDTH)
}

/// Formats the random-advice card: slip number, English text, Burmese text.
pub fn format_advice(slip: &AdviceSlip, myanmar: &str) -> String {
    let mut card = String::new();
    card.push_str(&Style::secondary(divider()));
    card.push('\n');
    card.push_str(&Style::label(format!("ADVICE #{}", slip.id)));
    card.push_str("\n\n");
    card.push_str(&Style::header(format!("\"{}\"", slip.advice)));
    card.push('\n');
    card.push_str(&Style::label("မြန်မာ"));
    card.push('\n');
    card.push_str(&Style::value(format!("\"{myanmar}\"")));
    card.push('\n');
    card.push_str(&Style::secondary(divider()));
    card
}

/// Formats the generated daily-quote card.
pub fn format_daily(quote: &DailyQuote) -> String {
    let mut card = String::new();
    card.push_str(&Style::secondary(divider()));
    card.push('\n');
    card.push_str(&Style::label("QUOTE OF THE DAY"));
    card.push_str("\n\n");
    card.push_str(&Style::header(format!("\"{}\"", quote.en)));
    card.push('\n');
    card.push_str(&Style::label("မြန်မာ"));
    card.push('\n');
    card.push_str(&Style::value(format!("\"{}\"", quote.my)));
    card.push('\n');
    card.push_str(&Style::secondary(divider()));
    card
}

pub fn print_advice(slip: &AdviceSlip, myanmar: &str) {
    println!("{}", format_advice(slip, myanmar));
}

pub fn print_daily(quote: &DailyQuote) {
    println!("{}", format_daily(quote));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slip() -> AdviceSlip {
        AdviceSlip {
            id: 117,
            advice: "Be yourself.".to_string(),
        }
    }

    #[test]
    fn test_advice_card_contains_both_languages() {
        let card = format_advice(&slip(), "ကိုယ်ပိုင်ဖြစ်ပါ");
        assert!(card.contains("ADVICE #117"));
        assert!(card.contains("\"Be yourself.\""));
        assert!(card.contains("ကိုယ်ပိုင်ဖြစ်ပါ"));
        assert!(card.contains("မြန်မာ"));
    }

    #[test]
    fn test_daily_card_contains_both_languages() {
        let quote = DailyQuote {
            en: "Start small.".to_string(),
            my: "သေးငယ်စွာစတင်ပါ".to_string(),
        };
        let card = format_daily(&quote);
        assert!(card.contains("QUOTE OF THE DAY"));
        assert!(card.contains("\"Start small.\""));
        assert!(card.contains("သေးငယ်စွာစတင်ပါ"));
    }

    #[test]
    fn test_cards_are_framed() {
        let card = format_advice(&slip(), "x");
        assert!(card.starts_with(&Style::secondary(divider())));
        assert!(card.ends_with(&Style::secondary(divider())));
    }
}
