use argh::FromArgs;
use frame_gap_analyzer::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Frames analyzed when none are given on the command line.
const DEMO_FRAMES: [FrameNumber; 9] = [1, 2, 3, 5, 6, 10, 11, 16, 19];

/// Reports the frames missing from a sequence of frame numbers
#[derive(FromArgs, Debug)]
pub struct Args {
    /// frames separated by commas or spaces, e.g. "1,2,5,9" (default: demo sequence)
    #[argh(option, short = 'f')]
    frames: Option<String>,

    /// title printed in the report header
    #[argh(option, short = 't', default = "DEFAULT_REPORT_TITLE.to_string()")]
    title: String,

    /// log analysis details to stderr
    #[argh(switch, short = 'v')]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();
    init_tracing(args.verbose);

    let frames = match &args.frames {
        Some(text) => parse_frame_list(text)?,
        None => {
            info!("no frames given, analyzing the demo sequence");
            DEMO_FRAMES.to_vec()
        }
    };

    let mut analyzer = FrameAnalyzer::new(frames);
    let report = analyzer.analyze();
    println!("{}", render_report_block(report, &args.title));

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "frame_gap_analyzer=debug,frame_report=debug"
    } else {
        "frame_gap_analyzer=info,frame_report=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
