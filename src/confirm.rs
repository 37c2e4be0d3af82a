use std::io::{self, BufRead, Write};

const PROMPT: &str = "This will change the modification dates of the files in the given path.\n\
                      You might want to make a backup first. Continue? [y/N] ";

/// Ask the user before touching anything. Only "y" or "yes" (any case) counts as consent;
/// an empty line or end of input is a no.
pub fn confirm(reader: &mut impl BufRead, writer: &mut impl Write) -> io::Result<bool> {
    write!(writer, "{}", PROMPT)?;
    writer.flush()?;

    let mut answer = String::new();
    if reader.read_line(&mut answer)? == 0 {
        writeln!(writer)?;
        return Ok(false);
    }

    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
