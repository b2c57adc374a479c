//! Interactive extra-copies prompt.
//!
//! The loop is written against any `BufRead`/`Write` pair so it can be
//! driven by cursors in tests, independent of the terminal.

use std::io::{BufRead, Write};

/// Ask whether to print extra copies of any loaded images and collect the
/// result as work-list extensions: one index into `names` per extra copy,
/// appended in the order the user requested them. Re-prompts on invalid
/// answers, unknown file names, and non-positive quantities; end of input
/// finishes the loop cleanly.
pub fn collect_extra_copies<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    names: &[&str],
) -> std::io::Result<Vec<usize>> {
    let mut extras = Vec::new();

    loop {
        write!(
            out,
            "Do you want to specify multiple copies for any images (e.g., lands or tokens)? (Y/N): "
        )?;
        out.flush()?;
        let Some(answer) = read_trimmed(input)? else {
            break;
        };
        match answer.to_uppercase().as_str() {
            "N" => break,
            "Y" => {}
            _ => {
                writeln!(out, "Invalid input. Please enter Y or N.")?;
                continue;
            }
        }

        loop {
            write!(out, "Enter the image file name (e.g., 'forest.png'): ")?;
            out.flush()?;
            let Some(file_name) = read_trimmed(input)? else {
                return Ok(extras);
            };
            let Some(index) = names.iter().position(|&name| name == file_name) else {
                writeln!(
                    out,
                    "File '{file_name}' not found in the images folder. Try again."
                )?;
                continue;
            };

            write!(
                out,
                "How many copies of '{file_name}' do you want in total? (Enter a number >=1): "
            )?;
            out.flush()?;
            let Some(quantity_line) = read_trimmed(input)? else {
                return Ok(extras);
            };
            let quantity: usize = match quantity_line.parse() {
                Ok(quantity) if quantity >= 1 => quantity,
                _ => {
                    writeln!(out, "Invalid quantity. Must be an integer >=1.")?;
                    continue;
                }
            };

            // One copy is already in the work-list
            extras.extend(std::iter::repeat_n(index, quantity - 1));
            writeln!(out, "Added {} extra copies of '{file_name}'.", quantity - 1)?;

            write!(out, "Add multiples for another image? (Y/N): ")?;
            out.flush()?;
            match read_trimmed(input)? {
                Some(line) if line.eq_ignore_ascii_case("y") => {}
                _ => break,
            }
        }
    }

    Ok(extras)
}

/// One trimmed line, or `None` at end of input.
fn read_trimmed<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
