//! Lexicon-based sentiment scoring for requirement text
//!
//! A small polarity lexicon with single-token negation and a compound
//! normalization, producing one score per requirement in [-1, 1]. The
//! planning engine treats the score as opaque; anything computing a real
//! number per description could stand in for this module.

use srp_core::Requirement;

const POSITIVE_WORDS: &[&str] = &[
    "benefit", "best", "better", "clean", "clear", "delight", "easier", "easy", "fast", "faster",
    "good", "great", "helpful", "improve", "improved", "improvement", "intuitive", "like", "love",
    "nice", "polish", "reliable", "secure", "smooth", "stable", "streamline", "support", "win",
];

const NEGATIVE_WORDS: &[&str] = &[
    "annoying", "bad", "block", "blocked", "broken", "bug", "bugs", "confusing", "crash",
    "crashes", "error", "errors", "fail", "fails", "failure", "flaky", "freeze", "hang", "leak",
    "missing", "outage", "regression", "slow", "unstable", "vulnerability", "worse", "worst",
    "wrong",
];

const NEGATORS: &[&str] = &["cannot", "never", "no", "not", "without"];

/// Normalization constant for the compound score.
const COMPOUND_ALPHA: f64 = 15.0;

/// Scores requirement descriptions by lexicon polarity.
#[derive(Debug, Default)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Compound polarity of one description, in (-1, 1).
    ///
    /// Token valences are summed (a preceding negator flips a token's
    /// valence) and normalized as `x / sqrt(x^2 + alpha)`.
    pub fn score(&self, text: &str) -> f64 {
        let tokens: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect();

        let mut sum = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            let valence = if POSITIVE_WORDS.contains(&token.as_str()) {
                1.0
            } else if NEGATIVE_WORDS.contains(&token.as_str()) {
                -1.0
            } else {
                continue;
            };

            let negated = i > 0 && NEGATORS.contains(&tokens[i - 1].as_str());
            sum += if negated { -valence } else { valence };
        }

        if sum == 0.0 {
            return 0.0;
        }
        sum / (sum * sum + COMPOUND_ALPHA).sqrt()
    }

    /// Score every description, pairing it with its compound polarity.
    pub fn score_all(&self, descriptions: &[String]) -> Vec<Requirement> {
        descriptions
            .iter()
            .map(|description| Requirement::new(description.clone(), self.score(description)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let analyzer = SentimentAnalyzer::new();
        assert!(analyzer.score("Improve the onboarding flow") > 0.0);
        assert!(analyzer.score("Great, stable and fast search") > 0.0);
    }

    #[test]
    fn test_negative_text() {
        let analyzer = SentimentAnalyzer::new();
        assert!(analyzer.score("Fix crash on startup") < 0.0);
        assert!(analyzer.score("Resolve flaky export errors") < 0.0);
    }

    #[test]
    fn test_neutral_text_scores_zero() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.score("Update the settings page"), 0.0);
        assert_eq!(analyzer.score(""), 0.0);
    }

    #[test]
    fn test_negation_flips_valence() {
        let analyzer = SentimentAnalyzer::new();
        assert!(analyzer.score("Login is not stable") < 0.0);
        assert!(analyzer.score("Checkout is not broken anymore") > 0.0);
    }

    #[test]
    fn test_compound_stays_in_range() {
        let analyzer = SentimentAnalyzer::new();
        let score = analyzer.score("great great great great great great great great");
        assert!(score > 0.0 && score < 1.0);

        let score = analyzer.score("crash crash crash crash crash crash crash crash");
        assert!(score < 0.0 && score > -1.0);
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(
            analyzer.score("Fix CRASH!"),
            analyzer.score("fix crash")
        );
    }

    #[test]
    fn test_score_all_pairs_descriptions() {
        let analyzer = SentimentAnalyzer::new();
        let requirements = analyzer.score_all(&[
            "Add login".to_string(),
            "Fix crash".to_string(),
        ]);

        assert_eq!(requirements.len(), 2);
        assert_eq!(requirements[0].description, "Add login");
        assert!(requirements[1].sentiment < 0.0);
    }
}
