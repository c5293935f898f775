//! Build script for sca-i18n crate
//!
//! Validates every Fluent catalog under `locales/` at compile time:
//! - every supported locale has a `main.ftl`
//! - all Fluent syntax is valid
//! - every locale defines exactly the message ids of the reference locale
//! - every message uses the same variables in every locale
//!
//! It then generates the closed `TranslationKey` enum from the reference
//! catalog, so an unknown key is a compile error.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use fluent_syntax::ast::{Entry, Expression, InlineExpression, Pattern, PatternElement};
use fluent_syntax::parser::parse;

/// Locales that must ship a catalog. Keep in sync with `Locale::all()`.
const SUPPORTED_LOCALES: [&str; 3] = ["en", "es", "de"];

/// Catalog every other locale is compared against.
const REFERENCE_LOCALE: &str = "en";

/// Message ids in file order, with the variables each message uses.
struct Catalog {
    order: Vec<String>,
    messages: BTreeMap<String, BTreeSet<String>>,
}

/// Extract message ids and their variables from a Fluent file
fn extract_messages_and_params(content: &str) -> Result<Catalog, String> {
    let resource = parse(content).map_err(|(_, errors)| format!("Parse errors: {:?}", errors))?;

    let mut catalog = Catalog {
        order: Vec::new(),
        messages: BTreeMap::new(),
    };

    for entry in resource.body {
        if let Entry::Message(message) = entry {
            let key = message.id.name.to_string();
            let mut params = BTreeSet::new();

            if let Some(Pattern { elements }) = &message.value {
                extract_params_from_pattern(elements, &mut params);
            } else {
                return Err(format!("Message '{}' has no value", key));
            }

            for attribute in &message.attributes {
                extract_params_from_pattern(&attribute.value.elements, &mut params);
            }

            if catalog.messages.insert(key.clone(), params).is_some() {
                return Err(format!("Duplicate message id '{}'", key));
            }
            catalog.order.push(key);
        }
    }

    Ok(catalog)
}

/// Recursively extract variable names from pattern elements
fn extract_params_from_pattern<S>(elements: &[PatternElement<S>], params: &mut BTreeSet<String>)
where
    S: AsRef<str> + ToString,
{
    for element in elements {
        if let PatternElement::Placeable { expression } = element {
            extract_params_from_expression(expression, params);
        }
    }
}

fn extract_params_from_expression<S>(expression: &Expression<S>, params: &mut BTreeSet<String>)
where
    S: AsRef<str> + ToString,
{
    match expression {
        Expression::Select { selector, variants } => {
            extract_params_from_inline_expression(selector, params);
            for variant in variants {
                extract_params_from_pattern(&variant.value.elements, params);
            }
        }
        Expression::Inline(inline) => {
            extract_params_from_inline_expression(inline, params);
        }
    }
}

fn extract_params_from_inline_expression<S>(
    expression: &InlineExpression<S>,
    params: &mut BTreeSet<String>,
) where
    S: AsRef<str> + ToString,
{
    match expression {
        InlineExpression::VariableReference { id } => {
            params.insert(id.name.to_string());
        }
        InlineExpression::FunctionReference { arguments, .. } => {
            for arg in &arguments.positional {
                extract_params_from_inline_expression(arg, params);
            }
            for arg in &arguments.named {
                extract_params_from_inline_expression(&arg.value, params);
            }
        }
        InlineExpression::Placeable { expression } => {
            extract_params_from_expression(expression, params);
        }
        InlineExpression::MessageReference { .. }
        | InlineExpression::TermReference { .. }
        | InlineExpression::StringLiteral { .. }
        | InlineExpression::NumberLiteral { .. } => {}
    }
}

fn locales_dir() -> Result<PathBuf, String> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(|_| "CARGO_MANIFEST_DIR not set")?;
    let dir = Path::new(&manifest_dir).join("locales");
    if !dir.is_dir() {
        return Err(format!("Locales directory not found: {}", dir.display()));
    }
    Ok(dir)
}

fn load_catalogs(dir: &Path) -> Result<BTreeMap<&'static str, Catalog>, String> {
    let mut catalogs = BTreeMap::new();
    let mut errors = Vec::new();

    for locale in SUPPORTED_LOCALES {
        let path = dir.join(locale).join("main.ftl");
        let result = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))
            .and_then(|content| {
                extract_messages_and_params(&content)
                    .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
            });

        match result {
            Ok(catalog) => {
                catalogs.insert(locale, catalog);
            }
            Err(e) => errors.push(format!("{}: {}", locale, e)),
        }
    }

    if errors.is_empty() {
        Ok(catalogs)
    } else {
        Err(format!("Validation errors:\n{}", errors.join("\n")))
    }
}

fn check_consistency(catalogs: &BTreeMap<&'static str, Catalog>) -> Result<(), String> {
    let reference = catalogs
        .get(REFERENCE_LOCALE)
        .ok_or_else(|| format!("Reference locale '{}' missing", REFERENCE_LOCALE))?;

    let mut errors = Vec::new();
    for (locale, catalog) in catalogs {
        if *locale == REFERENCE_LOCALE {
            continue;
        }

        for key in reference.messages.keys() {
            if !catalog.messages.contains_key(key) {
                errors.push(format!("{}: Missing message key '{}'", locale, key));
            }
        }

        for key in catalog.messages.keys() {
            if !reference.messages.contains_key(key) {
                errors.push(format!("{}: Extra message key '{}'", locale, key));
            }
        }

        for (key, ref_params) in &reference.messages {
            if let Some(locale_params) = catalog.messages.get(key) {
                if ref_params != locale_params {
                    errors.push(format!(
                        "{}: Parameter mismatch for '{}'. Expected: {:?}, Found: {:?}",
                        locale, key, ref_params, locale_params
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!("Consistency errors:\n{}", errors.join("\n")))
    }
}

/// `srv_1_title` -> `Srv1Title`
fn variant_name(id: &str) -> String {
    id.split(|c| c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn generate_keys(reference: &Catalog) -> Result<String, String> {
    let mut seen = HashSet::new();
    let variants: Vec<(String, &String)> = reference
        .order
        .iter()
        .map(|id| (variant_name(id), id))
        .collect();

    for (variant, id) in &variants {
        if !seen.insert(variant.clone()) {
            return Err(format!("Message id '{}' collides with another id as '{}'", id, variant));
        }
    }

    let mut out = String::new();
    out.push_str("/// Identifier of a message in the translation catalog.\n");
    out.push_str("///\n");
    out.push_str("/// Generated from the reference catalog by the build script.\n");
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]\n");
    out.push_str("pub enum TranslationKey {\n");
    for (variant, id) in &variants {
        let _ = writeln!(out, "    /// `{}`", id);
        let _ = writeln!(out, "    {},", variant);
    }
    out.push_str("}\n\n");

    out.push_str("impl TranslationKey {\n");
    out.push_str("    /// Every key, in catalog order.\n");
    out.push_str("    pub const ALL: &'static [TranslationKey] = &[\n");
    for (variant, _) in &variants {
        let _ = writeln!(out, "        TranslationKey::{},", variant);
    }
    out.push_str("    ];\n\n");

    out.push_str("    /// Fluent message id of this key.\n");
    out.push_str("    pub const fn id(self) -> &'static str {\n");
    out.push_str("        match self {\n");
    for (variant, id) in &variants {
        let _ = writeln!(out, "            TranslationKey::{} => {:?},", variant, id);
    }
    out.push_str("        }\n    }\n\n");

    out.push_str("    /// Variables the message expects.\n");
    out.push_str("    pub const fn variables(self) -> &'static [&'static str] {\n");
    out.push_str("        match self {\n");
    for (variant, id) in &variants {
        let params = &reference.messages[*id];
        let list: Vec<String> = params.iter().map(|p| format!("{:?}", p)).collect();
        let _ = writeln!(
            out,
            "            TranslationKey::{} => &[{}],",
            variant,
            list.join(", ")
        );
    }
    out.push_str("        }\n    }\n}\n");

    Ok(out)
}

fn run() -> Result<(), String> {
    println!("cargo:rerun-if-changed=locales");
    println!("cargo:rerun-if-changed=build.rs");

    let dir = locales_dir()?;
    for locale in SUPPORTED_LOCALES {
        println!(
            "cargo:rerun-if-changed={}",
            dir.join(locale).join("main.ftl").display()
        );
    }

    let catalogs = load_catalogs(&dir)?;
    check_consistency(&catalogs)?;

    let reference = &catalogs[REFERENCE_LOCALE];
    let generated = generate_keys(reference)?;

    let out_dir = env::var("OUT_DIR").map_err(|_| "OUT_DIR not set")?;
    let out_path = Path::new(&out_dir).join("translation_keys.rs");
    fs::write(&out_path, generated)
        .map_err(|e| format!("Failed to write {}: {}", out_path.display(), e))?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Locale validation failed:\n{}", e);
        process::exit(1);
    }
}
