//! Weaver CLI
//!
//! Builds a demonstration page with the scoped-construction API and prints
//! it, for eyeballing serializer output and tree structure.

use anyhow::Result;
use std::env;

use weaver_core::prelude::*;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut pretty = true;
    let mut as_json = false;
    let mut needle: Option<String> = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--compact" => pretty = false,
            "--json" => as_json = true,
            "--find" => match iter.next() {
                Some(text) => needle = Some(text.clone()),
                None => {
                    eprintln!("Error: --find requires a substring argument");
                    std::process::exit(1);
                }
            },
            "--help" | "-h" => {
                eprintln!("Usage: weaver-cli [--compact] [--json] [--find SUBSTRING]");
                return Ok(());
            }
            other => {
                eprintln!("Error: unknown argument '{other}'");
                std::process::exit(1);
            }
        }
    }

    let page = build_demo_page();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    println!("=== Rendered page ===");
    println!("{}", page.display(pretty));

    if let Some(needle) = needle {
        let hits = page.find(needle.as_str());
        println!("\n=== Matches for '{needle}' ===");
        println!("{} text node(s)", hits.len());
        for hit in hits {
            println!("{}", hit.display(false));
        }
    }

    Ok(())
}

/// Builds the demo page: a header, a feature table, and a conditional
/// comment, mixing scoped construction with explicit composition.
fn build_demo_page() -> Document {
    let navigation = scope(nav(()), || {
        attach(class_("top"));
        nest(ul(()), || {
            nest(li(()), || attach(a((href("/"), "Home"))));
            nest(li(()), || attach(a((href("/docs"), "Documentation"))));
        });
    });

    let features = table_from(
        &[
            &["Feature", "Status"],
            &["Scoped construction", "done"],
            &["Conditional comments", "done"],
        ],
        Some(HeaderScope::Row),
    );

    let mut document = Document::with((
        navigation,
        div((
            class_("content"),
            h1(("weaver",)),
            p(("An HTML tree you can build, search, and mutate in Rust.",)),
            features,
        )),
        conditional_comment("lt IE 9", (p(("Please upgrade your browser.",)),)),
    ));
    document.set_title("weaver demo");
    document
}
