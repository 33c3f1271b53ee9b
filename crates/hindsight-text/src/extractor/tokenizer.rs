//! Boundary tokenizer with overlapping substrings for CJK runs.

use hindsight_core::config::ExtractionConfig;

use super::stop_words::is_stop_word;

/// CJK ideographs, kana and hangul: scripts written without word spacing.
pub fn is_cjk(c: char) -> bool {
    matches!(
        c as u32,
        0x3040..=0x30FF      // hiragana, katakana
            | 0x3400..=0x4DBF  // CJK extension A
            | 0x4E00..=0x9FFF  // CJK unified ideographs
            | 0xAC00..=0xD7AF  // hangul syllables
            | 0xF900..=0xFAFF  // CJK compatibility ideographs
            | 0x20000..=0x2A6DF // CJK extension B
    )
}

/// Split text into lowercase terms.
///
/// Latin-style words break on anything that is not alphanumeric or `_`.
/// Each run of CJK characters yields every substring of
/// `cjk_ngram_min..=cjk_ngram_max` characters. Terms shorter than
/// `min_term_length` characters and stop words are dropped.
pub fn tokenize(text: &str, config: &ExtractionConfig) -> Vec<String> {
    let mut terms = Vec::new();
    let mut word = String::new();
    let mut run: Vec<char> = Vec::new();

    for c in text.chars().flat_map(char::to_lowercase) {
        if is_cjk(c) {
            flush_word(&mut word, &mut terms, config);
            run.push(c);
        } else if c.is_alphanumeric() || c == '_' {
            flush_run(&mut run, &mut terms, config);
            word.push(c);
        } else {
            flush_word(&mut word, &mut terms, config);
            flush_run(&mut run, &mut terms, config);
        }
    }
    flush_word(&mut word, &mut terms, config);
    flush_run(&mut run, &mut terms, config);

    terms
}

fn flush_word(word: &mut String, terms: &mut Vec<String>, config: &ExtractionConfig) {
    if word.is_empty() {
        return;
    }
    let trimmed = word.trim_matches('_');
    if trimmed.chars().count() >= config.min_term_length && !is_stop_word(trimmed) {
        terms.push(trimmed.to_string());
    }
    word.clear();
}

fn flush_run(run: &mut Vec<char>, terms: &mut Vec<String>, config: &ExtractionConfig) {
    if run.is_empty() {
        return;
    }
    for n in config.cjk_ngram_min..=config.cjk_ngram_max {
        if n > run.len() || n < config.min_term_length {
            continue;
        }
        for window in run.windows(n) {
            let gram: String = window.iter().collect();
            if !is_stop_word(&gram) {
                terms.push(gram);
            }
        }
    }
    run.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str) -> Vec<String> {
        tokenize(text, &ExtractionConfig::default())
    }

    #[test]
    fn splits_on_punctuation_and_lowercases() {
        assert_eq!(
            tok("PM2 cannot start, module-type error!"),
            vec!["pm2", "cannot", "start", "module", "type", "error"]
        );
    }

    #[test]
    fn keeps_dimension_tokens_whole() {
        assert_eq!(tok("resolution 1920x1080"), vec!["resolution", "1920x1080"]);
    }

    #[test]
    fn drops_short_terms_and_stop_words() {
        assert_eq!(tok("a fix to the .cjs file"), vec!["fix", "cjs", "file"]);
    }

    #[test]
    fn cjk_runs_become_overlapping_substrings() {
        let terms = tok("截图失败");
        // 2-grams
        assert!(terms.contains(&"截图".to_string()));
        assert!(terms.contains(&"图失".to_string()));
        assert!(terms.contains(&"失败".to_string()));
        // 3-grams and the whole 4-char run
        assert!(terms.contains(&"截图失".to_string()));
        assert!(terms.contains(&"截图失败".to_string()));
        assert_eq!(terms.len(), 3 + 2 + 1);
    }

    #[test]
    fn mixed_script_text_splits_at_script_boundary() {
        let terms = tok("PM2启动失败");
        assert_eq!(terms[0], "pm2");
        assert!(terms.contains(&"启动".to_string()));
        assert!(terms.contains(&"启动失败".to_string()));
    }

    #[test]
    fn single_cjk_character_is_dropped() {
        assert!(tok("是").is_empty());
    }

    #[test]
    fn empty_and_symbol_only_input_yield_nothing() {
        assert!(tok("").is_empty());
        assert!(tok("  ,.;!?  ").is_empty());
    }
}
