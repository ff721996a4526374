//! Build script to generate the embedded dictionary
//!
//! Reads `data/words.txt` and writes a const array into `OUT_DIR`.

use std::env;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const WORD_FILE: &str = "data/words.txt";

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;

    generate_word_list(
        WORD_FILE,
        &Path::new(&out_dir).join("words.rs"),
        "WORDS",
        "Default dictionary, mixed word lengths",
    )?;

    println!("cargo:rerun-if-changed={WORD_FILE}");
    Ok(())
}

fn generate_word_list(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) -> io::Result<()> {
    let content = fs::read_to_string(input_path)?;
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let mut output = BufWriter::new(fs::File::create(output_path)?);

    writeln!(output, "// Generated from {input_path}")?;
    writeln!(output)?;
    writeln!(output, "/// {doc_comment}")?;
    writeln!(output, "pub const {const_name}: &[&str] = &[")?;
    for word in &words {
        writeln!(output, "    {word:?},")?;
    }
    writeln!(output, "];")?;
    writeln!(output)?;
    writeln!(output, "/// Number of words in {const_name}")?;
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", words.len())?;

    output.flush()
}
