use objscale::{rescale, Error, Result};

use std::env;
use std::fs;

/// Factor applied when none is given on the command line.
const DEFAULT_SCALE: f64 = 100.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = env::args().skip(1);
    let source = args
        .next()
        .ok_or(Error::Generic("source obj path not specified"))?;
    let destination = args
        .next()
        .ok_or(Error::Generic("destination obj path not specified"))?;
    let factor = match args.next() {
        Some(argument) => argument
            .parse()
            .map_err(|_| Error::Generic("scale factor is not a number"))?,
        None => DEFAULT_SCALE,
    };

    match rescale(&source, &destination, factor) {
        Ok(summary) => {
            tracing::info!(
                %source,
                %destination,
                factor,
                lines = summary.lines,
                vertices = summary.vertices,
                "rescaled model"
            );
            Ok(())
        }
        Err(error) => {
            // A partially written destination is not a valid model.
            let _ = fs::remove_file(&destination);
            Err(error)
        }
    }
}
