use std::process;

use serde::Serialize;

use umwero_core::registry::MappingRegistry;
use umwero_core::translit::{Token, Transliterator};

use super::{escape_pua, unescape_pua};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn forward(text: &str, escape: bool) {
    let out = Transliterator::global().forward(text);
    if escape {
        println!("{}", escape_pua(&out));
    } else {
        println!("{out}");
    }
}

/// `text` may spell PUA glyphs as `<U+XXXX>`.
pub fn reverse(text: &str) {
    println!("{}", Transliterator::global().reverse(&unescape_pua(text)));
}

#[derive(Serialize)]
struct ExplainOutput<'a> {
    direction: &'static str,
    input: &'a str,
    output: String,
    tokens: &'a [Token],
}

pub fn explain(text: &str, reverse: bool, json: bool) {
    let t = Transliterator::global();
    let (direction, input, tokens) = if reverse {
        let input = unescape_pua(text);
        let tokens = t.tokenize_reverse(&input);
        ("reverse", input, tokens)
    } else {
        ("forward", text.to_string(), t.tokenize_forward(text))
    };

    if json {
        let out = ExplainOutput {
            direction,
            input: &input,
            output: tokens.iter().map(|t| t.output.as_str()).collect(),
            tokens: &tokens,
        };
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&out), "Error: {}")
        );
    } else {
        for line in explain_lines(&tokens) {
            println!("{line}");
        }
    }
}

/// One line per token: `input -> output  (kind)`, with PUA escaped.
pub fn explain_lines(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| {
            let mut line = format!(
                "{:>10} -> {:<10} ({:?})",
                escape_pua(&t.input),
                escape_pua(&t.output),
                t.kind
            );
            if t.ambiguous {
                line.push_str(" ambiguous");
            }
            line
        })
        .collect()
}

pub fn ambiguities() {
    for line in ambiguity_lines(MappingRegistry::global()) {
        println!("{line}");
    }
}

/// `glyph  canonical  [all candidates]` for every shared glyph code.
pub fn ambiguity_lines(registry: &MappingRegistry) -> Vec<String> {
    registry
        .ambiguous_glyphs()
        .map(|(glyph, candidates)| {
            let all: Vec<&str> = candidates.iter().map(|e| e.cluster.as_str()).collect();
            format!(
                "{:<8} {:<6} [{}]",
                escape_pua(glyph),
                candidates[0].cluster,
                all.join(", ")
            )
        })
        .collect()
}
