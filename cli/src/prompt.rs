use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Enter the path to a file or directory: ";

/// Ask for a path and read one line of reply. EOF yields an empty string.
pub fn read_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Strip surrounding whitespace and a layer of matching quotes, as pasted
/// from a file manager ("C:\My Photos" or '/home/me/pics').
pub fn clean_path_input(raw: &str) -> &str {
    let trimmed = raw.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    trimmed
}
