//! Sentiment lexicons
//!
//! Word valences are on a -4.0 (most negative) to 4.0 (most positive) scale.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{Error, Result};

/// Valence added or removed by an intensifier
pub const BOOSTER_INCREMENT: f64 = 0.293;
/// Valence removed or added by a dampener
pub const BOOSTER_DECREMENT: f64 = -0.293;

/// Trait for a sentiment lexicon
pub trait SentimentLexicon {
    /// Valence of a lowercase word
    fn valence(&self, word: &str) -> Option<f64>;

    /// Intensity shift of a lowercase booster/dampener word
    fn booster(&self, word: &str) -> Option<f64>;

    /// Whether a lowercase word negates what follows
    fn is_negation(&self, word: &str) -> bool;
}

/// General-purpose English lexicon
#[derive(Debug, Clone)]
pub struct EnglishLexicon {
    valences: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl EnglishLexicon {
    /// Create the built-in lexicon
    pub fn new() -> Self {
        let strong_positive = [
            ("amazing", 2.8), ("awesome", 3.1), ("beautiful", 2.9), ("best", 3.2),
            ("brilliant", 2.8), ("delight", 2.9), ("delighted", 3.1), ("delightful", 2.9),
            ("excellent", 2.7), ("exceptional", 2.5), ("fabulous", 2.4), ("fantastic", 2.6),
            ("flawless", 2.6), ("glad", 2.0), ("glorious", 2.6), ("great", 3.1),
            ("happy", 2.7), ("incredible", 2.4), ("love", 3.2), ("loved", 2.9),
            ("lovely", 2.8), ("loves", 2.7), ("loving", 2.9), ("magnificent", 3.1),
            ("marvelous", 2.9), ("outstanding", 3.0), ("perfect", 2.7), ("perfectly", 3.2),
            ("phenomenal", 2.7), ("superb", 3.1), ("terrific", 2.1), ("thrilled", 2.4),
            ("win", 2.8), ("wonderful", 2.7), ("wow", 2.8), ("adore", 2.6),
            ("adorable", 2.2), ("ecstatic", 2.8), ("joy", 2.8), ("joyful", 2.9),
            ("masterpiece", 3.1), ("heavenly", 2.6), ("impressive", 2.3), ("spectacular", 2.6),
        ];

        let moderate_positive = [
            ("agree", 1.5), ("appreciate", 1.7), ("appreciated", 2.3), ("benefit", 2.0),
            ("better", 1.9), ("calm", 1.3), ("care", 2.2), ("cheerful", 2.5),
            ("clean", 1.7), ("clear", 1.6), ("comfortable", 1.5), ("convenient", 1.5),
            ("cool", 1.3), ("courteous", 2.3), ("easy", 1.9), ("effective", 2.1),
            ("efficient", 1.8), ("enjoy", 2.2), ("enjoyed", 2.3), ("enjoyable", 1.9),
            ("fair", 1.3), ("fast", 0.9), ("fine", 0.8), ("fix", 1.0),
            ("fixed", 1.1), ("free", 2.3), ("fresh", 1.3), ("friendly", 2.2),
            ("fun", 2.3), ("good", 1.9), ("grateful", 2.0), ("happily", 2.2),
            ("helpful", 1.9), ("helped", 1.6), ("honest", 2.3), ("hope", 1.9),
            ("improve", 1.9), ("improved", 2.1), ("improvement", 2.0), ("interesting", 1.7),
            ("kind", 2.4), ("like", 1.5), ("liked", 1.8), ("nice", 1.8),
            ("okay", 0.9), ("ok", 1.2), ("pleasant", 2.3), ("pleased", 1.9),
            ("polite", 1.6), ("positive", 2.6), ("pretty", 2.2), ("professional", 1.6),
            ("quick", 1.2), ("quickly", 1.1), ("recommend", 1.5), ("recommended", 1.3),
            ("reliable", 1.9), ("reasonable", 1.6), ("relieved", 1.6), ("respect", 2.1),
            ("responsive", 1.5), ("safe", 1.9), ("satisfied", 1.8), ("satisfying", 2.0),
            ("smooth", 1.2), ("solid", 1.3), ("solved", 1.1), ("strong", 2.3),
            ("success", 2.7), ("successful", 2.8), ("support", 1.7), ("supportive", 1.8),
            ("sweet", 2.0), ("thank", 1.5), ("thanks", 1.9), ("thankful", 2.7),
            ("trust", 2.3), ("useful", 1.9), ("valuable", 2.1), ("warm", 0.9),
            ("welcome", 2.0), ("well", 1.1), ("worth", 0.9), ("yes", 1.7),
            ("affordable", 1.4), ("accurate", 1.4), ("attentive", 1.6), ("intuitive", 1.6),
            ("knowledgeable", 1.5), ("patient", 1.3), ("prompt", 1.2), ("stable", 1.2),
        ];

        let strong_negative = [
            ("abysmal", -3.0), ("angry", -2.3), ("appalling", -2.9), ("atrocious", -3.1),
            ("awful", -2.0), ("broken", -2.1), ("crap", -1.6), ("disaster", -3.1),
            ("disastrous", -2.9), ("disgusting", -2.4), ("dreadful", -2.7), ("fraud", -2.8),
            ("furious", -2.7), ("garbage", -1.9), ("hate", -2.7), ("hated", -3.2),
            ("hateful", -2.2), ("horrendous", -2.9), ("horrible", -2.5), ("horrid", -2.5),
            ("infuriating", -2.6), ("miserable", -2.2), ("nightmare", -2.9), ("pathetic", -2.7),
            ("rude", -2.0), ("scam", -2.0), ("shameful", -2.2), ("sucks", -1.5),
            ("terrible", -2.1), ("trash", -1.7), ("useless", -1.8), ("worst", -3.1),
            ("worthless", -1.9), ("disgusted", -2.4), ("outrage", -2.3), ("outrageous", -2.0),
            ("toxic", -2.4), ("unacceptable", -2.0), ("ridiculous", -1.5), ("hopeless", -2.0),
        ];

        let moderate_negative = [
            ("annoyed", -1.6), ("annoying", -1.8), ("bad", -2.5), ("bored", -1.1),
            ("boring", -1.3), ("bug", -1.2), ("buggy", -1.6), ("complain", -1.5),
            ("complaint", -1.2), ("confused", -1.3), ("confusing", -0.9), ("crash", -1.7),
            ("crashed", -1.8), ("crashes", -1.6), ("damaged", -1.9), ("delay", -1.3),
            ("delayed", -0.9), ("difficult", -1.5), ("disappointed", -1.9), ("disappointing", -2.2),
            ("dirty", -1.9), ("dislike", -1.6), ("error", -1.7), ("expensive", -0.9),
            ("fail", -2.5), ("failed", -2.3), ("failure", -2.3), ("fault", -1.7),
            ("frustrated", -2.4), ("frustrating", -1.9), ("hard", -0.4), ("hurt", -2.4),
            ("ignored", -1.6), ("issue", -1.1), ("lack", -1.3), ("lazy", -1.5),
            ("lost", -1.3), ("mess", -1.5), ("messy", -1.5), ("mistake", -1.4),
            ("no", -1.2), ("noisy", -0.7), ("overpriced", -1.6), ("pain", -2.3),
            ("poor", -2.1), ("poorly", -1.8), ("problem", -1.7), ("problems", -1.7),
            ("regret", -1.8), ("sad", -2.1), ("slow", -0.6), ("sorry", -0.3),
            ("stupid", -2.4), ("tired", -1.9), ("trouble", -1.7), ("ugly", -2.3),
            ("unfortunately", -1.4), ("unhappy", -1.8), ("unhelpful", -1.7), ("unreliable", -1.6),
            ("upset", -1.6), ("waste", -1.8), ("wasted", -2.2), ("weak", -1.9),
            ("worse", -2.1), ("wrong", -2.1), ("cold", -0.3), ("late", -0.4),
            ("refund", -0.6), ("unclear", -1.0), ("unprofessional", -1.9), ("careless", -1.5),
        ];

        let valences = strong_positive
            .iter()
            .chain(moderate_positive.iter())
            .chain(strong_negative.iter())
            .chain(moderate_negative.iter())
            .map(|(word, score)| (word.to_string(), *score))
            .collect();

        let intensifiers = [
            "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly",
            "deeply", "enormously", "entirely", "especially", "exceptionally", "extremely",
            "fabulously", "fully", "greatly", "highly", "hugely", "incredibly", "intensely",
            "majorly", "more", "most", "particularly", "purely", "quite", "really",
            "remarkably", "so", "substantially", "thoroughly", "totally", "tremendously",
            "unbelievably", "unusually", "utterly", "very",
        ];
        let dampeners = [
            "almost", "barely", "hardly", "kinda", "less", "little", "marginally",
            "occasionally", "partly", "scarcely", "slightly", "somewhat", "sorta",
        ];

        let boosters = intensifiers
            .iter()
            .map(|w| (w.to_string(), BOOSTER_INCREMENT))
            .chain(dampeners.iter().map(|w| (w.to_string(), BOOSTER_DECREMENT)))
            .collect();

        let negations = [
            "aint", "ain't", "arent", "aren't", "cannot", "cant", "can't", "couldnt",
            "couldn't", "darent", "daren't", "didnt", "didn't", "doesnt", "doesn't", "dont",
            "don't", "hadnt", "hadn't", "hasnt", "hasn't", "havent", "haven't", "isnt",
            "isn't", "mightnt", "mightn't", "mustnt", "mustn't", "neednt", "needn't",
            "neither", "never", "none", "nope", "nor", "not", "nothing", "nowhere",
            "oughtnt", "shant", "shan't", "shouldnt", "shouldn't", "wasnt", "wasn't",
            "werent", "weren't", "without", "wont", "won't", "wouldnt", "wouldn't",
            "rarely", "seldom", "despite",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self {
            valences,
            boosters,
            negations,
        }
    }

    /// Add or override a word valence
    pub fn add_word(&mut self, word: &str, valence: f64) {
        self.valences.insert(word.to_lowercase(), valence);
    }

    /// Merge a tab-separated `word<TAB>valence[<TAB>...]` file over the
    /// built-in entries. Extra columns are ignored.
    pub fn extend_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_path(path.as_ref())?;

        let mut added = 0;
        for (i, result) in reader.records().enumerate() {
            let record = result?;
            let line = i + 1;

            let word = record.get(0).unwrap_or("").trim();
            if word.is_empty() {
                continue;
            }

            let valence = record
                .get(1)
                .ok_or_else(|| Error::InvalidLexicon {
                    line,
                    reason: format!("missing valence for '{}'", word),
                })?
                .trim()
                .parse::<f64>()
                .map_err(|e| Error::InvalidLexicon {
                    line,
                    reason: e.to_string(),
                })?;

            self.add_word(word, valence);
            added += 1;
        }

        debug!(entries = added, path = %path.as_ref().display(), "Extended sentiment lexicon");
        Ok(added)
    }
}

impl Default for EnglishLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentLexicon for EnglishLexicon {
    fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_valences() {
        let lexicon = EnglishLexicon::new();

        assert!(lexicon.valence("love").unwrap() > 2.0);
        assert!(lexicon.valence("terrible").unwrap() < -2.0);
        assert_eq!(lexicon.valence("table"), None);
    }

    #[test]
    fn test_no_word_is_both_booster_and_valence() {
        let lexicon = EnglishLexicon::new();
        for word in lexicon.boosters.keys() {
            assert!(lexicon.valence(word).is_none(), "{word}");
        }
        for word in &lexicon.negations {
            assert!(lexicon.valence(word).is_none(), "{word}");
        }
    }

    #[test]
    fn test_boosters_and_negations() {
        let lexicon = EnglishLexicon::new();

        assert_eq!(lexicon.booster("very"), Some(BOOSTER_INCREMENT));
        assert_eq!(lexicon.booster("slightly"), Some(BOOSTER_DECREMENT));
        assert!(lexicon.is_negation("not"));
        assert!(lexicon.is_negation("never"));
        assert!(!lexicon.is_negation("good"));
    }

    #[test]
    fn test_extend_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "meh\t-0.8\t0.4\t[-1, -1, 0]").unwrap();
        writeln!(file, "GOOD\t2.5").unwrap();

        let mut lexicon = EnglishLexicon::new();
        let added = lexicon.extend_from_path(file.path()).unwrap();

        assert_eq!(added, 2);
        assert_eq!(lexicon.valence("meh"), Some(-0.8));
        assert_eq!(lexicon.valence("good"), Some(2.5));
    }

    #[test]
    fn test_extend_rejects_bad_valence() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "meh\tnotanumber").unwrap();

        let mut lexicon = EnglishLexicon::new();
        let result = lexicon.extend_from_path(file.path());
        assert!(matches!(result, Err(Error::InvalidLexicon { line: 1, .. })));
    }
}
