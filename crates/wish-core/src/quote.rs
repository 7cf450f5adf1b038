//! Christmas Quotes
//!
//! A quote comes from the remote random-quote endpoint, dressed up with a
//! festive title and icon. When that fails, one of the local Santa quotes
//! is used instead.

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::random::RandomSource;

/// Quote shown in the success modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub title: String,
    pub message: String,
    pub icon: String,
}

impl Quote {
    fn from_parts((title, message, icon): (&str, &str, &str)) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Local quotes used when the remote source is unavailable
pub const FALLBACK_QUOTES: &[(&str, &str, &str)] = &[
    ("Ho Ho Ho!", "Santa loves your wish list! You've been VERY good this year!", "🎅"),
    ("Wonderful!", "Rudolph and the reindeer are already packing your gifts!", "🦌"),
    ("Amazing!", "The elves are working overtime just for you!", "🧝"),
    ("Fantastic!", "Your wishes made Santa do a happy dance!", "💃"),
    ("Incredible!", "Mrs. Claus said your list is the sweetest she's ever seen!", "🍪"),
    ("Spectacular!", "Santa just added you to the EXTRA nice list!", "⭐"),
    ("Jolly Good!", "The North Pole is buzzing with excitement for your gifts!", "🎁"),
    ("Merry Wishes!", "Santa's sleigh has extra room just for your presents!", "🛷"),
    ("Magic!", "Christmas magic is making your wishes come true!", "✨"),
    ("Hooray!", "Even the snowmen are cheering for your wish list!", "⛄"),
];

/// Icons attached to remote quotes
pub const CHRISTMAS_ICONS: &[&str] = &[
    "🎅", "🦌", "🎄", "🎁", "⭐", "❄️", "🛷", "🧝", "⛄", "🍪", "✨", "🔔",
];

/// Titles attached to remote quotes
pub const CHRISTMAS_TITLES: &[&str] = &[
    "Christmas Wisdom!",
    "Santa Says...",
    "Holiday Magic!",
    "Festive Thought!",
    "Joyful Message!",
    "Merry Insight!",
];

const UNKNOWN_AUTHOR: &str = "Unknown";

/// Body of the random-quote endpoint. Other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RemoteQuote {
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// Where the displayed quote came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Remote(Quote),
    Fallback(Quote),
}

impl Resolution {
    pub fn into_quote(self) -> Quote {
        match self {
            Resolution::Remote(q) | Resolution::Fallback(q) => q,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback(_))
    }
}

/// The quote shown before the button is ever pressed
pub fn initial_quote() -> Quote {
    Quote::from_parts(FALLBACK_QUOTES[0])
}

fn random_fallback(rng: &mut impl RandomSource) -> Quote {
    rng.pick(FALLBACK_QUOTES)
        .copied()
        .map(Quote::from_parts)
        .unwrap_or_else(initial_quote)
}

/// Turn a remote quote into a festive one
pub fn decorate(remote: RemoteQuote, rng: &mut impl RandomSource) -> Result<Quote, QuoteError> {
    // Blank quotes are rejected, but the text is shown exactly as received
    let text = remote
        .quote
        .filter(|q| !q.trim().is_empty())
        .ok_or(QuoteError::Empty)?;
    let author = remote
        .author
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

    let icon = rng.pick(CHRISTMAS_ICONS).copied().unwrap_or("🎄");
    let title = rng.pick(CHRISTMAS_TITLES).copied().unwrap_or("Christmas Wisdom!");

    Ok(Quote {
        title: title.to_string(),
        message: format!("\"{}\" — {}", text, author),
        icon: icon.to_string(),
    })
}

/// Pick the quote to display from the outcome of a fetch. Never fails.
pub fn resolve(fetched: Result<RemoteQuote, QuoteError>, rng: &mut impl RandomSource) -> Resolution {
    match fetched.and_then(|remote| decorate(remote, rng)) {
        Ok(quote) => {
            log::debug!("using remote quote: {}", quote.message);
            Resolution::Remote(quote)
        }
        Err(e) => {
            log::warn!("Using fallback quote: {}", e);
            Resolution::Fallback(random_fallback(rng))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::Sequence;

    fn remote(quote: Option<&str>, author: Option<&str>) -> RemoteQuote {
        RemoteQuote {
            quote: quote.map(str::to_string),
            author: author.map(str::to_string),
        }
    }

    #[test]
    fn test_initial_quote() {
        let q = initial_quote();
        assert_eq!(q.title, "Ho Ho Ho!");
        assert_eq!(q.icon, "🎅");
    }

    #[test]
    fn test_decorate_remote() {
        // First draw picks the icon, second the title
        let mut rng = Sequence::new(&[0.0, 0.99]);
        let q = decorate(remote(Some("Stay hungry."), Some("Steve Jobs")), &mut rng).unwrap();
        assert_eq!(q.icon, "🎅");
        assert_eq!(q.title, "Merry Insight!");
        assert_eq!(q.message, "\"Stay hungry.\" — Steve Jobs");
    }

    #[test]
    fn test_decorate_missing_author() {
        let mut rng = Sequence::new(&[0.5]);
        let q = decorate(remote(Some("Be kind."), None), &mut rng).unwrap();
        assert_eq!(q.message, "\"Be kind.\" — Unknown");
    }

    #[test]
    fn test_decorate_keeps_text_as_received() {
        let mut rng = Sequence::new(&[0.5]);
        let q = decorate(remote(Some(" Keep going. "), Some("Anon")), &mut rng).unwrap();
        assert_eq!(q.message, "\" Keep going. \" — Anon");
    }

    #[test]
    fn test_decorate_blank_quote() {
        let mut rng = Sequence::new(&[0.5]);
        assert_eq!(decorate(remote(Some("   "), Some("Nobody")), &mut rng), Err(QuoteError::Empty));
        assert_eq!(decorate(remote(None, None), &mut rng), Err(QuoteError::Empty));
    }

    #[test]
    fn test_resolve_remote() {
        let mut rng = Sequence::new(&[0.2]);
        let res = resolve(Ok(remote(Some("Hello"), Some("World"))), &mut rng);
        assert!(!res.is_fallback());
        assert_eq!(res.into_quote().message, "\"Hello\" — World");
    }

    #[test]
    fn test_resolve_falls_back_on_error() {
        let mut rng = Sequence::new(&[0.35]);
        let res = resolve(Err(QuoteError::Http("offline".into())), &mut rng);
        assert!(res.is_fallback());
        // 0.35 * 10 -> index 3
        assert_eq!(res.into_quote().title, "Fantastic!");
    }

    #[test]
    fn test_resolve_falls_back_on_empty_body() {
        let mut rng = Sequence::new(&[0.95]);
        let res = resolve(Ok(RemoteQuote::default()), &mut rng);
        assert_eq!(res, Resolution::Fallback(Quote::from_parts(FALLBACK_QUOTES[9])));
    }

    #[test]
    fn test_remote_quote_ignores_extra_fields() {
        let body = r#"{"id":17,"quote":"Less is more.","author":"Mies"}"#;
        let parsed: RemoteQuote = serde_json::from_str(body).unwrap();
        assert_eq!(parsed, remote(Some("Less is more."), Some("Mies")));

        let empty: RemoteQuote = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, RemoteQuote::default());
    }

    #[test]
    fn test_fallback_list_shape() {
        assert_eq!(FALLBACK_QUOTES.len(), 10);
        assert_eq!(CHRISTMAS_ICONS.len(), 12);
        assert_eq!(CHRISTMAS_TITLES.len(), 6);
    }
}
