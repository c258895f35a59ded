use std::collections::HashMap;
use std::fs;

use clap::{Arg, Command};
use verbatim_mt::{
    MockAlignment, PatternIndex, PostProcessor, TranslationRecord, extract_literal_phrases,
    mock_record,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let matches = Command::new("verbatim-mt")
        .version("0.1.0")
        .about("Restore no-translate spans and numbers in a machine-translated sentence")
        .arg(
            Arg::new("source")
                .help("Source sentence (may contain <literal>...</literal> markers)")
                .required_unless_present("record-file")
                .index(1),
        )
        .arg(
            Arg::new("target")
                .help("Machine-translated sentence")
                .required_unless_present("record-file")
                .index(2),
        )
        .arg(
            Arg::new("language")
                .long("lang")
                .short('l')
                .help("Language the pattern set is keyed under (default: en)")
                .default_value("en"),
        )
        .arg(
            Arg::new("alignment")
                .long("alignment")
                .short('a')
                .help("Word alignment as src-tgt pairs, e.g. \"0-0 1-2 2-1\" (default: monotone)"),
        )
        .arg(
            Arg::new("record-file")
                .long("record")
                .short('r')
                .help("JSON file holding a full translation record (overrides positional input)"),
        )
        .arg(
            Arg::new("patterns-file")
                .long("patterns")
                .short('p')
                .help("JSON file mapping language codes to no-translate patterns"),
        )
        .arg(
            Arg::new("pattern")
                .long("pattern")
                .short('P')
                .help("Inline no-translate pattern for the given language (repeatable)")
                .action(clap::ArgAction::Append),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show the token rewrite step by step")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let language = matches.get_one::<String>("language").unwrap();
    let verbose = matches.get_flag("verbose");

    // 1. Assemble the pattern configuration
    let mut config: HashMap<String, Vec<String>> = match matches.get_one::<String>("patterns-file")
    {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("failed to read patterns file '{}': {}", path, e))?;
            serde_json::from_str(&content)
                .map_err(|e| format!("failed to parse patterns file '{}': {}", path, e))?
        }
        None => HashMap::new(),
    };
    if let Some(inline) = matches.get_many::<String>("pattern") {
        config
            .entry(language.to_string())
            .or_default()
            .extend(inline.cloned());
    }
    // Always know the requested language, even with literal-only protection
    config.entry(language.to_string()).or_default();

    let processor = PostProcessor::new(PatternIndex::build(&config)?);

    // 2. Build the record: from a JSON file, or from the positional
    //    sentences (stripping literal markers, fabricating an alignment)
    let record = match matches.get_one::<String>("record-file") {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("failed to read record file '{}': {}", path, e))?;
            let mut record: TranslationRecord = serde_json::from_str(&content)
                .map_err(|e| format!("failed to parse record file '{}': {}", path, e))?;
            record.ensure_tokens();
            record
        }
        None => {
            let source = matches.get_one::<String>("source").unwrap();
            let target = matches.get_one::<String>("target").unwrap();
            let (clean_source, phrases) = extract_literal_phrases(source);
            match matches.get_one::<String>("alignment") {
                Some(raw) => mock_record(
                    &clean_source,
                    target,
                    MockAlignment::Custom(raw.to_string()),
                ),
                None => mock_record(&clean_source, target, MockAlignment::Monotone),
            }
            .with_literal_phrases(phrases)
        }
    };

    if verbose {
        println!("📝 Source: \"{}\"", record.source_text);
        println!("🌍 Target: \"{}\" ({})", record.target_text, language);
        println!("   Alignment: \"{}\"", record.raw_alignment);
        if !record.literal_protected_phrases.is_empty() {
            println!(
                "   Literal phrases: {:?}",
                record.literal_protected_phrases
            );
        }
        println!("   Target tokens before: {:?}", record.target_tokens);
    }

    // 3. Run the post-processing pass
    let before: Vec<String> = record.target_tokens.clone();
    let result = match processor.process(record, language) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("❌ Post-processing failed: {}", e);
            return Err(e.into());
        }
    };

    if verbose {
        println!("   Target tokens after:  {:?}", result.record.target_tokens);
        let rewritten = before
            .iter()
            .zip(result.record.target_tokens.iter())
            .filter(|(b, a)| b != a)
            .count();
        println!("✅ {} token(s) rewritten", rewritten);
        println!();
    }

    println!("{}", result.final_text);
    Ok(())
}
