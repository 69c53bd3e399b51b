use std::io::{BufRead, Write};

use anyhow::{Context, bail};

pub fn parse_iterations(input: &str) -> anyhow::Result<usize> {
    let Ok(iterations) = input.trim().parse::<i64>() else {
        bail!("k has to be an integer.");
    };

    if iterations <= 0 {
        bail!("k has to be a positive integer.");
    }

    usize::try_from(iterations).context("k is too large")
}

/// Asks for the iteration count until a positive integer is entered.
pub fn ask_iterations<R, W>(input: &mut R, output: &mut W) -> anyhow::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();

    loop {
        write!(output, "input the k: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Couldn't read iteration count")? == 0 {
            bail!("Input closed before an iteration count was given");
        }

        match parse_iterations(&line) {
            Ok(iterations) => return Ok(iterations),
            Err(e) => writeln!(output, "{e}\nEnter again.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_integers() {
        assert_eq!(parse_iterations("200\n").unwrap(), 200);
        assert_eq!(parse_iterations(" 1 ").unwrap(), 1);
    }

    #[test]
    fn rejects_zero_negative_and_garbage() {
        assert_eq!(
            parse_iterations("0").unwrap_err().to_string(),
            "k has to be a positive integer."
        );
        assert_eq!(
            parse_iterations("-4").unwrap_err().to_string(),
            "k has to be a positive integer."
        );
        assert_eq!(
            parse_iterations("ten").unwrap_err().to_string(),
            "k has to be an integer."
        );
    }

    #[test]
    fn reprompts_until_valid() {
        let mut input = "abc\n0\n15\n".as_bytes();
        let mut output = Vec::new();

        let iterations = ask_iterations(&mut input, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(iterations, 15);
        assert_eq!(output.matches("input the k: ").count(), 3);
        assert!(output.contains("k has to be an integer.\nEnter again."));
        assert!(output.contains("k has to be a positive integer.\nEnter again."));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut input = "nope\n".as_bytes();
        assert!(ask_iterations(&mut input, &mut Vec::new()).is_err());
    }
}
