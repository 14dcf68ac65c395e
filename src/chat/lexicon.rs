//! Static category-recognition vocabulary for the chat interpreter.
//!
//! The table is ordered: scanning stops at the first keyword that occurs in
//! the utterance, so earlier entries win ties. This is a deliberate,
//! rule-ordered matcher, not a scoring model.

use once_cell::sync::Lazy;

use crate::ledger::INCOME_CATEGORY;

/// One category with the keywords that imply it.
#[derive(Debug, Clone, Copy)]
pub struct LexiconEntry {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
}

/// Ordered category-to-keyword table.
pub static LEXICON: Lazy<Vec<LexiconEntry>> = Lazy::new(|| {
    vec![
        LexiconEntry {
            category: "Food",
            keywords: &[
                "dinner", "lunch", "breakfast", "food", "snack", "snacks", "coffee", "tea",
                "pizza", "burger", "groceries", "grocery", "restaurant", "swiggy", "zomato",
            ],
        },
        LexiconEntry {
            category: "Travel",
            keywords: &[
                "uber", "ola", "cab", "taxi", "bus", "train", "flight", "fuel", "petrol",
                "diesel", "metro", "auto",
            ],
        },
        LexiconEntry {
            category: "Shopping",
            keywords: &[
                "shoes", "shirt", "clothes", "dress", "amazon", "flipkart", "myntra", "bag",
                "watch", "jeans",
            ],
        },
        LexiconEntry {
            category: "Entertainment",
            keywords: &["movie", "netflix", "spotify", "game", "games", "concert", "show"],
        },
        LexiconEntry {
            category: "Bills",
            keywords: &[
                "electricity", "rent", "wifi", "broadband", "recharge", "bill", "water", "gas",
                "emi",
            ],
        },
        LexiconEntry {
            category: "Health",
            keywords: &["medicine", "doctor", "hospital", "gym", "pharmacy"],
        },
        LexiconEntry {
            category: "Education",
            keywords: &["book", "books", "course", "tuition", "fees", "exam"],
        },
        LexiconEntry {
            category: INCOME_CATEGORY,
            keywords: &["salary", "income", "received", "credited", "bonus", "refund"],
        },
    ]
});

/// First lexicon keyword occurring in the lowercased utterance, in table
/// order. Returns the owning category together with the matched keyword.
pub fn match_keyword(utterance_lower: &str) -> Option<(&'static str, &'static str)> {
    for entry in LEXICON.iter() {
        for keyword in entry.keywords {
            if utterance_lower.contains(keyword) {
                return Some((entry.category, keyword));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::match_keyword;

    #[test]
    fn first_table_entry_wins_ties() {
        // "dinner" (Food) is listed before "movie" (Entertainment).
        let (category, keyword) = match_keyword("dinner and a movie").unwrap();
        assert_eq!(category, "Food");
        assert_eq!(keyword, "dinner");
    }

    #[test]
    fn unknown_text_matches_nothing() {
        assert!(match_keyword("something entirely different").is_none());
    }
}
