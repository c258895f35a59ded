//! End-to-end tests for the post-editing pipeline
//!
//! These exercise the full path, from pattern configuration and record
//! construction through span resolution, alignment substitution, numeric
//! protection, and the final join, the way a caller would drive it, with the
//! reference scenarios from the engine's contract.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use crate::literal::extract_literal_phrases;
    use crate::mock::{MockAlignment, mock_record};
    use crate::patterns::PatternIndex;
    use crate::processor::PostProcessor;
    use crate::record::TranslationRecord;

    fn processor(entries: &[(&str, &[&str])]) -> PostProcessor {
        let config: HashMap<String, Vec<String>> = entries
            .iter()
            .map(|(lang, pats)| {
                (
                    lang.to_string(),
                    pats.iter().map(|p| p.to_string()).collect(),
                )
            })
            .collect();
        PostProcessor::new(PatternIndex::build(&config).unwrap())
    }

    #[test]
    fn test_e2e_french_name_pattern_restores_contraction_tokens() {
        // Reference scenario: the tokenizer splits "l'etat" into "l'" and
        // "etat" with no separator; both must come back verbatim while the
        // translated words for "mon nom est" stay translated.
        let proc = processor(&[("fr", &["mon nom est (.+)"])]);
        let record = TranslationRecord::with_tokens(
            "mon nom est l'etat",
            "my name is the state",
            ["mon", "nom", "est", "l'", "etat"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ["my", "name", "is", "the", "state"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            "0-0 1-1 2-2 3-3 4-4",
        );

        let result = proc.process(record, "fr").unwrap();
        assert_eq!(result.final_text, "my name is l' etat");
    }

    #[test]
    fn test_e2e_digit_run_forced_verbatim() {
        // Reference scenario: the translator spelled "20" out; the aligned
        // target token is forced back to the literal digits.
        let proc = processor(&[("en", &["never matching pattern"])]);
        let record = mock_record(
            "I have 20 apples",
            "j'ai vingt pommes",
            MockAlignment::Custom("0-0 1-0 2-1 3-2".to_string()),
        );

        let result = proc.process(record, "en").unwrap();
        assert_eq!(result.final_text, "j'ai 20 pommes");
    }

    #[test]
    fn test_e2e_blank_alignment_passthrough_despite_digits_and_patterns() {
        let proc = processor(&[("en", &["(\\d+)", "(apples)"])]);
        let record = mock_record("I have 20 apples", "j'ai vingt pommes", MockAlignment::None);

        let result = proc.process(record, "en").unwrap();
        assert_eq!(result.final_text, "j'ai vingt pommes");
    }

    #[test]
    fn test_e2e_reordered_target_follows_alignment() {
        // SOV-style reordering: the protected token moved to the front of
        // the target sentence and must be substituted there.
        let proc = processor(&[("en", &["sent (\\w+)"])]);
        let record = mock_record("she sent Paolo", "Paolo' inviato lei", MockAlignment::Reversed);

        let result = proc.process(record, "en").unwrap();
        assert_eq!(result.final_text, "Paolo inviato lei");
    }

    #[test]
    fn test_e2e_alignment_gap_degrades_to_partial_fix() {
        // Token 2 ("20") is unaligned: the numeric pass has nowhere to
        // write, the rest of the sentence is untouched.
        let proc = processor(&[("en", &["never matching pattern"])]);
        let record = mock_record(
            "I have 20 apples",
            "j'ai vingt pommes",
            MockAlignment::Gapped(vec![2]),
        );

        let result = proc.process(record, "en").unwrap();
        assert_eq!(result.final_text, "j'ai vingt pommes");
    }

    #[test]
    fn test_e2e_literal_markers_from_source_to_final_text() {
        // Full upstream-to-downstream path: extract <literal> markers,
        // attach the phrases, process, and see the span verbatim.
        let marked = "please ship to <literal>Acme GmbH</literal> fast";
        let (clean, phrases) = extract_literal_phrases(marked);
        assert_eq!(clean, "please ship to Acme GmbH fast");

        let proc = processor(&[("de", &["unused (pattern)"])]);
        let record = TranslationRecord::new(
            &clean,
            "bitte liefern an Acmé GmbH schnell",
            "0-0 1-1 2-2 3-3 4-4 5-5",
        )
        .with_literal_phrases(phrases);

        let result = proc.process(record, "de").unwrap();
        assert_eq!(result.final_text, "bitte liefern an Acme GmbH schnell");
    }

    #[test]
    fn test_e2e_numeric_preserves_target_token_count() {
        let proc = processor(&[("en", &["x"])]);
        let record = mock_record(
            "send 42 boxes and 7 crates",
            "envoyez des boîtes et des caisses",
            MockAlignment::Monotone,
        );
        let before = record.target_tokens.len();

        let result = proc.process(record, "en").unwrap();
        assert_eq!(result.record.target_tokens.len(), before);
    }

    #[test]
    fn test_e2e_second_pass_changes_nothing() {
        let proc = processor(&[("fr", &["mon nom est (.+)"])]);
        let record = TranslationRecord::with_tokens(
            "mon nom est l'etat",
            "my name is the state",
            ["mon", "nom", "est", "l'", "etat"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ["my", "name", "is", "the", "state"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            "0-0 1-1 2-2 3-3 4-4",
        );
        let first = proc.process(record, "fr").unwrap();

        let rerun = TranslationRecord::with_tokens(
            &first.record.source_text,
            &first.final_text,
            first.record.source_tokens.clone(),
            first.record.target_tokens.clone(),
            &first.record.raw_alignment,
        );
        let second = proc.process(rerun, "fr").unwrap();
        assert_eq!(second.final_text, first.final_text);
    }

    #[test]
    fn test_e2e_shared_index_across_processors() {
        // Two processors over one Arc'd index: both serve calls, neither
        // observes the other's literal phrases.
        let index = Arc::new(
            PatternIndex::build(
                &[("en".to_string(), vec!["keep (\\w+)".to_string()])]
                    .into_iter()
                    .collect(),
            )
            .unwrap(),
        );
        let a = PostProcessor::with_shared(Arc::clone(&index));
        let b = PostProcessor::with_shared(Arc::clone(&index));

        let record = mock_record("keep gadget safe", "garde bidule sûr", MockAlignment::Monotone)
            .with_literal_phrases(["safe".to_string()]);
        let result = a.process(record, "en").unwrap();
        assert_eq!(result.final_text, "garde gadget safe");

        let record = mock_record("keep gadget safe", "garde bidule sûr", MockAlignment::Monotone);
        let result = b.process(record, "en").unwrap();
        assert_eq!(result.final_text, "garde gadget sûr");

        assert_eq!(index.patterns_for("en").unwrap().len(), 1);
    }

    #[test]
    fn test_e2e_multiple_languages_one_index() {
        let proc = processor(&[
            ("fr", &["mon nom est (.+)"]),
            ("es", &["mi nombre es (.+)"]),
        ]);

        let fr = mock_record("mon nom est Paolo", "my name is Paul", MockAlignment::Monotone);
        assert_eq!(proc.process(fr, "fr").unwrap().final_text, "my name is Paolo");

        let es = mock_record("mi nombre es Paolo", "my name is Paul", MockAlignment::Monotone);
        assert_eq!(proc.process(es, "es-MX").unwrap().final_text, "my name is Paolo");
    }
}
