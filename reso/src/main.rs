//! Reso command line: load a circuit image, iterate it, save the frames.

use argh::FromArgs;
use log::{LevelFilter, info};
use reso::{Board, Palette, load_image, save_image};
use std::process::ExitCode;

/// Simulate a Reso circuit drawn as a PNG image.
#[derive(FromArgs, Debug)]
struct Options {
    /// the circuit image to load
    #[argh(positional)]
    input: String,
    /// prefix the output frames are saved under
    #[argh(option, short = 's')]
    save: String,
    /// number of iterations to run. Default: 1
    #[argh(option, short = 'n', default = "1")]
    numiter: usize,
    /// only save the final frame
    #[argh(switch, short = 'o')]
    outputlast: bool,
    /// the palette to compile under, "legacy" or "extended". Default: "extended"
    #[argh(option, default = "Palette::Extended", from_str_fn(parse_palette))]
    palette: Palette,
    /// print extra information while running
    #[argh(switch, short = 'v')]
    verbose: bool,
}

fn parse_palette(value: &str) -> Result<Palette, String> {
    match value {
        "legacy" => Ok(Palette::Legacy),
        "extended" => Ok(Palette::Extended),
        other => Err(format!(
            "unknown palette \"{other}\" (expected \"legacy\" or \"extended\")"
        )),
    }
}

fn main() -> ExitCode {
    let options: Options = argh::from_env();

    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(if options.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.init();

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> Result<(), Box<dyn std::error::Error>> {
    let image = load_image(&options.input)?;
    let mut board = Board::new(image, options.palette)?;
    info!(
        "loaded {} and iterating {} time(s)",
        options.input, options.numiter
    );

    let digits = frame_digits(options.numiter);
    for tick in 0..options.numiter {
        if !options.outputlast {
            save_frame(&board, &options.save, tick, digits)?;
        }
        // The image only needs refreshing on ticks whose frame is kept
        let update_image = !options.outputlast || tick + 1 == options.numiter;
        board.iterate(false, update_image);
    }

    // The final frame is always written
    save_frame(&board, &options.save, options.numiter, digits)?;
    Ok(())
}

fn save_frame(
    board: &Board,
    prefix: &str,
    index: usize,
    digits: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = format!("{prefix}{index:0digits$}.png");
    save_image(board.image(), &path)?;
    info!("wrote {path}");
    Ok(())
}

/// Zero-padding width covering the final frame number.
fn frame_digits(iterations: usize) -> usize {
    iterations.max(1).ilog10() as usize + 1
}

#[cfg(test)]
mod tests {
    use super::frame_digits;

    #[test]
    fn test_frame_digits() {
        assert_eq!(frame_digits(0), 1);
        assert_eq!(frame_digits(1), 1);
        assert_eq!(frame_digits(9), 1);
        assert_eq!(frame_digits(10), 2);
        assert_eq!(frame_digits(100), 3);
    }
}
