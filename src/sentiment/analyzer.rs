//! Rule-based polarity analyzer
//!
//! Sums lexicon valences with context rules (intensifiers, negation,
//! capitalization, contrastive "but", punctuation emphasis) and squashes the
//! sum into a compound score in [-1, 1].

use serde::{Deserialize, Serialize};

use super::lexicon::{EnglishLexicon, SentimentLexicon};

/// Valence added for an ALL-CAPS word in mixed-case text
const CAPS_INCREMENT: f64 = 0.733;
/// Multiplier applied to negated valences
const NEGATION_SCALAR: f64 = -0.74;
/// Normalization constant approximating the max expected sum
const NORMALIZATION_ALPHA: f64 = 15.0;
/// Emphasis per exclamation mark
const EXCLAMATION_INCREMENT: f64 = 0.292;
/// Exclamation marks counted at most
const MAX_EXCLAMATIONS: usize = 4;
/// Emphasis per question mark (two or three of them)
const QUESTION_INCREMENT: f64 = 0.18;
/// Emphasis cap for more than three question marks
const MAX_QUESTION_EMPHASIS: f64 = 0.96;

/// Sentiment proportions and compound score of one text
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    /// Share of negative valence
    pub neg: f64,
    /// Share of neutral words
    pub neu: f64,
    /// Share of positive valence
    pub pos: f64,
    /// Normalized overall score from -1.0 to 1.0
    pub compound: f64,
}

/// Lexicon and rule-based polarity analyzer
#[derive(Debug, Clone)]
pub struct PolarityAnalyzer<L = EnglishLexicon> {
    lexicon: L,
}

impl PolarityAnalyzer<EnglishLexicon> {
    /// Create an analyzer over the built-in English lexicon
    pub fn new() -> Self {
        Self {
            lexicon: EnglishLexicon::new(),
        }
    }
}

impl Default for PolarityAnalyzer<EnglishLexicon> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: SentimentLexicon> PolarityAnalyzer<L> {
    /// Create an analyzer over a custom lexicon
    pub fn with_lexicon(lexicon: L) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    /// Score a text
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let words: Vec<&str> = text.split_whitespace().map(strip_punctuation).collect();
        let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let cap_diff = has_cap_differential(&words);

        let mut sentiments = Vec::with_capacity(words.len());
        for i in 0..words.len() {
            // Boosters carry no valence of their own
            if self.lexicon.booster(&lower[i]).is_some() {
                sentiments.push(0.0);
                continue;
            }
            if lower[i] == "kind" && lower.get(i + 1).map(String::as_str) == Some("of") {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.valence_at(i, &words, &lower, cap_diff));
        }

        apply_but_rule(&lower, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn valence_at(&self, i: usize, words: &[&str], lower: &[String], cap_diff: bool) -> f64 {
        let Some(mut valence) = self.lexicon.valence(&lower[i]) else {
            return 0.0;
        };

        // "no" used as a determiner ("no problems") carries no valence itself
        if lower[i] == "no"
            && lower
                .get(i + 1)
                .is_some_and(|next| self.lexicon.valence(next).is_some())
        {
            valence = 0.0;
        }
        if (i > 0 && lower[i - 1] == "no")
            || (i > 1 && lower[i - 2] == "no")
            || (i > 2 && lower[i - 3] == "no" && matches!(lower[i - 1].as_str(), "or" | "nor"))
        {
            valence *= NEGATION_SCALAR;
        }

        if cap_diff && is_all_caps(words[i]) {
            valence += if valence > 0.0 { CAPS_INCREMENT } else { -CAPS_INCREMENT };
        }

        for distance in 0..3 {
            if i <= distance {
                break;
            }
            let j = i - (distance + 1);
            if self.lexicon.valence(&lower[j]).is_some() {
                continue;
            }

            let mut shift = self.booster_shift(words[j], &lower[j], valence, cap_diff);
            if distance == 1 {
                shift *= 0.95;
            } else if distance == 2 {
                shift *= 0.9;
            }
            valence += shift;
            valence = self.negation_check(valence, lower, distance, i);
        }

        self.least_check(valence, lower, i)
    }

    fn booster_shift(&self, word: &str, lower: &str, valence: f64, cap_diff: bool) -> f64 {
        let Some(mut shift) = self.lexicon.booster(lower) else {
            return 0.0;
        };
        if valence < 0.0 {
            shift = -shift;
        }
        if cap_diff && is_all_caps(word) {
            shift += if valence > 0.0 { CAPS_INCREMENT } else { -CAPS_INCREMENT };
        }
        shift
    }

    fn is_negated(&self, word: &str) -> bool {
        self.lexicon.is_negation(word) || word.contains("n't")
    }

    fn negation_check(&self, valence: f64, lower: &[String], distance: usize, i: usize) -> f64 {
        let emphatic = |w: &str| w == "so" || w == "this";
        match distance {
            0 => {
                if self.is_negated(&lower[i - 1]) {
                    return valence * NEGATION_SCALAR;
                }
            }
            1 => {
                if lower[i - 2] == "never" && emphatic(lower[i - 1].as_str()) {
                    return valence * 1.25;
                }
                if lower[i - 2] == "without" && lower[i - 1] == "doubt" {
                    return valence;
                }
                if self.is_negated(&lower[i - 2]) {
                    return valence * NEGATION_SCALAR;
                }
            }
            _ => {
                if lower[i - 3] == "never"
                    && (emphatic(lower[i - 2].as_str()) || emphatic(lower[i - 1].as_str()))
                {
                    return valence * 1.25;
                }
                if lower[i - 3] == "without"
                    && (lower[i - 2] == "doubt" || lower[i - 1] == "doubt")
                {
                    return valence;
                }
                if self.is_negated(&lower[i - 3]) {
                    return valence * NEGATION_SCALAR;
                }
            }
        }
        valence
    }

    /// "least" negates what follows unless it is "at least" / "very least"
    fn least_check(&self, valence: f64, lower: &[String], i: usize) -> f64 {
        if i > 0 && lower[i - 1] == "least" && self.lexicon.valence(&lower[i - 1]).is_none() {
            if i > 1 && matches!(lower[i - 2].as_str(), "at" | "very") {
                return valence;
            }
            return valence * NEGATION_SCALAR;
        }
        valence
    }
}

/// Strip leading/trailing ASCII punctuation unless that leaves two characters
/// or fewer (keeps emoticons such as `:)` intact)
fn strip_punctuation(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

/// True when some, but not all, words are ALL CAPS
fn has_cap_differential(words: &[&str]) -> bool {
    let caps = words.iter().filter(|w| is_all_caps(w)).count();
    let diff = words.len() - caps;
    diff > 0 && diff < words.len()
}

/// Words before the first "but" count half, words after it count 1.5x
fn apply_but_rule(lower: &[String], sentiments: &mut [f64]) {
    let Some(but) = lower.iter().position(|w| w == "but") else {
        return;
    };
    for (i, sentiment) in sentiments.iter_mut().enumerate() {
        if i < but {
            *sentiment *= 0.5;
        } else if i > but {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();

    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => MAX_QUESTION_EMPHASIS,
    };

    exclamations as f64 * EXCLAMATION_INCREMENT + question_emphasis
}

/// Squash an unbounded valence sum into [-1, 1]
pub fn normalize_score(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let emphasis = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize_score(sum);

    let mut pos = 0.0;
    let mut neg = 0.0;
    let mut neu = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos += s + 1.0;
        } else if s < 0.0 {
            neg += s - 1.0;
        } else {
            neu += 1.0;
        }
    }

    if pos > f64::abs(neg) {
        pos += emphasis;
    } else if pos < f64::abs(neg) {
        neg -= emphasis;
    }

    let total = pos + f64::abs(neg) + neu;
    PolarityScores {
        neg: round_to(f64::abs(neg / total), 3),
        neu: round_to(f64::abs(neu / total), 3),
        pos: round_to(f64::abs(pos / total), 3),
        compound: round_to(compound, 4),
    }
}
