//! Line-oriented formula tester

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use super::{CliError, check_source_len, get_doc_category};
use crate::Formula;

/// Options for the repl command
#[derive(Debug, Clone)]
pub struct ReplOptions {
    /// Initial first input
    pub l: f32,
    /// Initial second input
    pub v: f32,
    /// Print the banner and prompts
    pub interactive: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        ReplOptions {
            l: 10.0,
            v: 5.0,
            interactive: true,
        }
    }
}

const BANNER: &str = ":q to exit | :h for help | :l <x> / :v <x> set inputs";

/// Read formulas line by line and print each result.
///
/// Commands:
/// - `:q` quits
/// - `:h` prints the operator reference
/// - `:l <x>` and `:v <x>` change the inputs for following lines
///
/// Blank lines are skipped, and so are formulas longer than
/// [`MAX_SOURCE_LEN`](super::MAX_SOURCE_LEN) after printing why. The loop also ends at end of input.
pub fn run_repl<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    options: &ReplOptions,
) -> Result<(), CliError> {
    let (mut l, mut v) = (options.l, options.v);

    if options.interactive {
        writeln!(output, "curve {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(output, "{}", BANNER)?;
    }

    let mut lines = input.lines();
    loop {
        if options.interactive {
            write!(output, "> ")?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);

        match line.trim() {
            ":q" => break,
            ":h" => {
                writeln!(output, "{}", get_doc_category("operators")?)?;
                continue;
            }
            "" => continue,
            _ => {}
        }

        if let Some(arg) = line.trim().strip_prefix(":l") {
            set_input(&mut output, "L", arg, &mut l)?;
            continue;
        }
        if let Some(arg) = line.trim().strip_prefix(":v") {
            set_input(&mut output, "V", arg, &mut v)?;
            continue;
        }

        if let Err(err) = check_source_len(line) {
            warn!(%err, "repl line skipped");
            writeln!(output, "{}", err)?;
            continue;
        }

        let formula = Formula::new(line);
        let result = formula.evaluate(l, v);
        debug!(formula = %formula, l, v, result, "repl evaluation");
        writeln!(output, "{}", result)?;
    }

    Ok(())
}

fn set_input<W: Write>(output: &mut W, name: &str, arg: &str, slot: &mut f32) -> Result<(), CliError> {
    match arg.trim().parse::<f32>() {
        Ok(value) => {
            *slot = value;
            writeln!(output, "{} = {}", name, value)?;
        }
        Err(_) => writeln!(output, "{} = {} (not a number: {:?})", name, slot, arg.trim())?,
    }
    Ok(())
}
