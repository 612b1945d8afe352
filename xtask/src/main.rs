//! Developer tasks (schema generation, fixture deck checks).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use pfem_deck::{CopyDeck, LintLevel, lint_deck, parse_copy_deck_json};
use schemars::schema_for;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    match manifest_dir.parent() {
        Some(parent) if manifest_dir.ends_with("xtask") => parent.to_path_buf(),
        _ => manifest_dir,
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_copydeck_schema() -> schemars::Schema {
    schema_for!(pfem_deck::CopyDeck)
}

fn generate_trace_schema() -> schemars::Schema {
    schema_for!(pfem_types::Trace)
}

fn generate_result_schema() -> schemars::Schema {
    schema_for!(pfem_types::ExplainResult)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "pfem.copydeck.v1.json",
            generate: generate_copydeck_schema,
        },
        SchemaSpec {
            filename: "pfem.trace.v1.json",
            generate: generate_trace_schema,
        },
        SchemaSpec {
            filename: "pfem.explain-result.v1.json",
            generate: generate_result_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        // Compare parsed documents; key order depends on serde_json features.
        let expected = serde_json::to_value((spec.generate)())
            .with_context(|| format!("Failed to convert {}", spec.filename))?;
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let actual: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Check every fixture deck: schema-valid, lint-clean (errors only), and no kinds that the
/// English deck lacks.
fn deck_coverage() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_copydeck_schema())
        .context("Failed to convert copy deck schema")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile copy deck schema: {}", e))?;

    let decks = pfem_test_util::fixture_decks().context("Failed to list fixture decks")?;
    if decks.is_empty() {
        bail!("no fixture decks under {}", pfem_test_util::copydecks_dir());
    }

    let mut errors = Vec::new();
    let mut parsed: Vec<(String, CopyDeck)> = Vec::new();

    for (locale, path) in &decks {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as JSON", path))?;

        for err in validator.iter_errors(&value) {
            errors.push(format!("{}: schema validation: {}", locale, err));
        }

        let deck = match parse_copy_deck_json(&content) {
            Ok(deck) => deck,
            Err(err) => {
                errors.push(format!("{}: {:#}", locale, err));
                continue;
            }
        };

        if deck.meta.language != *locale {
            errors.push(format!(
                "{}: meta.language is '{}'",
                locale, deck.meta.language
            ));
        }
        for lint in lint_deck(&deck) {
            if lint.level == LintLevel::Error {
                errors.push(format!("{}: {}", locale, lint));
            }
        }
        parsed.push((locale.clone(), deck));
    }

    let english: Option<BTreeSet<&str>> = parsed
        .iter()
        .find(|(locale, _)| locale == pfem_deck::DEFAULT_LOCALE)
        .map(|(_, deck)| deck.errors.keys().map(String::as_str).collect());
    match &english {
        Some(known) => {
            for (locale, deck) in &parsed {
                for kind in deck.errors.keys() {
                    if !known.contains(kind.as_str()) {
                        errors.push(format!(
                            "{}: kind '{}' has no English entry",
                            locale, kind
                        ));
                    }
                }
            }
        }
        None => errors.push(format!(
            "no '{}' fixture deck",
            pfem_deck::DEFAULT_LOCALE
        )),
    }

    if errors.is_empty() {
        println!("✓ {} fixture decks validate against the schema", decks.len());
        println!("✓ no lint errors");
        println!("\n✓ All deck coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Deck coverage failed with {} errors", errors.len())
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  deck-coverage     Validate fixture copy decks (schema, lints, kinds)");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "deck-coverage" => deck_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
