//! Prompted input of a comparison session.
use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::warn;

/// A named input text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub text: String,
}

/// Everything needed for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Requested shingle size, if one was given.
    pub k: Option<usize>,
    pub target: Source,
    pub references: Vec<Source>,
}

/// Reads a session from `input`, writing prompts to `prompt`.
///
/// Texts span multiple lines and end at an empty line or at the end of input.
pub fn read_session<R, W>(input: &mut R, prompt: &mut W) -> Result<Session>
where
    R: BufRead,
    W: Write,
{
    write!(prompt, "Enter k-value for k-grams (3-7 recommended): ")?;
    prompt.flush()?;
    let line = read_line(input)?;
    let k = match line.trim().parse::<usize>() {
        Ok(k) => Some(k),
        Err(_) => {
            warn!("Could not parse k-value {:?}, using the default.", line.trim());
            None
        }
    };

    writeln!(prompt, "\n=== TARGET DOCUMENT ===")?;
    let target = read_source(input, prompt)?;

    writeln!(prompt, "\n=== REFERENCE DOCUMENTS ===")?;
    write!(prompt, "Enter number of reference documents: ")?;
    prompt.flush()?;
    let line = read_line(input)?;
    let num_refs = line.trim().parse::<usize>().unwrap_or_else(|_| {
        warn!("Could not parse reference count {:?}, using 0.", line.trim());
        0
    });

    let mut references = Vec::with_capacity(num_refs);
    for i in 0..num_refs {
        writeln!(prompt, "\nReference {}:", i + 1)?;
        references.push(read_source(input, prompt)?);
    }

    Ok(Session {
        k,
        target,
        references,
    })
}

fn read_source<R, W>(input: &mut R, prompt: &mut W) -> Result<Source>
where
    R: BufRead,
    W: Write,
{
    write!(prompt, "Enter filename: ")?;
    prompt.flush()?;
    let name = read_line(input)?.trim_end_matches(['\r', '\n']).to_string();
    writeln!(prompt, "Enter content (end with empty line):")?;
    let text = read_text(input)?;
    Ok(Source { name, text })
}

fn read_line<R>(input: &mut R) -> Result<String>
where
    R: BufRead,
{
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

fn read_text<R>(input: &mut R) -> Result<String>
where
    R: BufRead,
{
    let mut text = String::new();
    loop {
        let line = read_line(input)?;
        if line.trim_end_matches(['\r', '\n']).is_empty() {
            break;
        }
        text.push_str(&line);
    }
    Ok(text)
}
