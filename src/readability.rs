use hyphenation::{Hyphenator, Language, Load, Standard};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::interpreter::Metric;
use crate::tokenizer;

// en-US Liang patterns, breaking no closer than two letters to either end.
static EN_US: Lazy<Standard> = Lazy::new(|| {
    let mut dictionary = Standard::from_embedded(Language::EnglishUS)
        .expect("Failed to load embedded en-US hyphenation patterns");
    dictionary.minima = (2, 2);
    dictionary
});

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadabilityResult {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub smog_index: f64,
    pub coleman_liau_index: f64,
    pub automated_readability_index: f64,
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub total_words: usize,
    pub total_sentences: usize,
}

impl ReadabilityResult {
    pub fn score(&self, metric: Metric) -> f64 {
        match metric {
            Metric::FleschReadingEase => self.flesch_reading_ease,
            Metric::FleschKincaidGrade => self.flesch_kincaid_grade,
            Metric::SmogIndex => self.smog_index,
            Metric::ColemanLiauIndex => self.coleman_liau_index,
            Metric::AutomatedReadabilityIndex => self.automated_readability_index,
        }
    }

    /// The five indices in display order.
    pub fn scores(&self) -> [(Metric, f64); 5] {
        Metric::ALL.map(|metric| (metric, self.score(metric)))
    }
}

/// Raw counts the indices are computed from.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct TextCounts {
    words: usize,
    sentences: usize,
    characters: usize,
    syllables: usize,
    polysyllables: usize,
}

impl TextCounts {
    fn from_text(text: &str) -> Self {
        let (sentences, words) = tokenizer::tokenize(text);
        let mut counts = TextCounts {
            sentences: sentences.len(),
            ..TextCounts::default()
        };

        for word in &words {
            let syllables = count_syllables(word);
            counts.words += 1;
            counts.characters += word.chars().count();
            counts.syllables += syllables;
            if syllables >= 3 {
                counts.polysyllables += 1;
            }
        }

        counts
    }

    /// Sentence count used by the indices; unterminated text is one sentence.
    fn formula_sentences(&self) -> f64 {
        self.sentences.max(1) as f64
    }

    fn words_per_sentence(&self) -> f64 {
        self.words as f64 / self.formula_sentences()
    }

    fn syllables_per_word(&self) -> f64 {
        self.syllables as f64 / self.words as f64
    }

    fn characters_per_word(&self) -> f64 {
        self.characters as f64 / self.words as f64
    }

    fn flesch_reading_ease(&self) -> f64 {
        if self.words == 0 {
            return 0.0;
        }
        206.835 - 1.015 * self.words_per_sentence() - 84.6 * self.syllables_per_word()
    }

    fn flesch_kincaid_grade(&self) -> f64 {
        if self.words == 0 {
            return 0.0;
        }
        0.39 * self.words_per_sentence() + 11.8 * self.syllables_per_word() - 15.59
    }

    fn smog_index(&self) -> f64 {
        // SMOG is only defined over a sample of at least three sentences.
        if self.words == 0 || self.sentences < 3 {
            return 0.0;
        }
        1.0430 * (self.polysyllables as f64 * 30.0 / self.sentences as f64).sqrt() + 3.1291
    }

    fn coleman_liau_index(&self) -> f64 {
        if self.words == 0 {
            return 0.0;
        }
        let letters_per_100 = self.characters_per_word() * 100.0;
        let sentences_per_100 = self.formula_sentences() / self.words as f64 * 100.0;
        0.0588 * letters_per_100 - 0.296 * sentences_per_100 - 15.8
    }

    fn automated_readability_index(&self) -> f64 {
        if self.words == 0 {
            return 0.0;
        }
        4.71 * self.characters_per_word() + 0.5 * self.words_per_sentence() - 21.43
    }
}

pub fn analyze_text(text: &str) -> ReadabilityResult {
    let counts = TextCounts::from_text(text);

    let avg_sentence_length = if counts.sentences > 0 {
        counts.words as f64 / counts.sentences as f64
    } else {
        0.0
    };
    let avg_word_length = if counts.words > 0 {
        counts.characters_per_word()
    } else {
        0.0
    };

    ReadabilityResult {
        flesch_reading_ease: counts.flesch_reading_ease(),
        flesch_kincaid_grade: counts.flesch_kincaid_grade(),
        smog_index: counts.smog_index(),
        coleman_liau_index: counts.coleman_liau_index(),
        automated_readability_index: counts.automated_readability_index(),
        avg_sentence_length,
        avg_word_length,
        total_words: counts.words,
        total_sentences: counts.sentences,
    }
}

/// Counts syllables as the hyphenation points of the word plus one.
pub fn count_syllables(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    EN_US.hyphenate(word).breaks.len() + 1
}
