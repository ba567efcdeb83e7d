//! Trace subcommand handler

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, warn};

use lsviz::config::MIN_INTERVAL_MS;
use lsviz::player::render::{format_trace_frame, format_trace_header, format_trace_summary};
use lsviz::player::{lock_controller, spawn_autoplay, AutoplayStatus, PlaybackController};
use lsviz::search::{describe, Frame};
use lsviz::theme::current_theme;
use lsviz::{generate, Config, SearchRequest};

/// Options for `lsviz trace`.
pub struct TraceOptions<'a> {
    pub array: &'a str,
    pub target: &'a str,
    pub json: bool,
    pub animate: bool,
    pub interval_ms: Option<u64>,
    pub no_color: bool,
}

/// Print the full trace, or play it out one interval at a time.
///
/// Invalid input is returned as an error carrying the validation message.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, opts: &TraceOptions<'_>) -> Result<()> {
    let request = SearchRequest::parse(opts.array, opts.target)?;
    let sequence = generate(&request);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&sequence)?);
        return Ok(());
    }

    let theme = current_theme();
    let color = !opts.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && atty::is(atty::Stream::Stdout);
    let len = sequence.len();

    println!("{}", paint(color, &format_trace_header(&sequence), |t| theme.accent_text(t)));

    if !opts.animate {
        for position in 0..len {
            println!();
            println!("{}", format_trace_frame(&describe(&sequence, position), len, &theme, color));
        }
        println!();
        println!("{}", format_trace_summary(&sequence));
        return Ok(());
    }

    let interval = match opts.interval_ms {
        Some(ms) => Duration::from_millis(ms.max(MIN_INTERVAL_MS)),
        None => config.playback.interval(),
    };
    let summary = format_trace_summary(&sequence);

    let mut controller = PlaybackController::new();
    controller.load(sequence);
    let controller = Arc::new(Mutex::new(controller));

    let for_handler = Arc::clone(&controller);
    if let Err(e) = ctrlc::set_handler(move || {
        lock_controller(&for_handler).cancel_autoplay();
    }) {
        warn!(error = %e, "could not install Ctrl-C handler");
    }

    let (tx, rx) = mpsc::channel::<Frame>();
    debug!(interval_ms = interval.as_millis() as u64, "animating trace");
    let worker = spawn_autoplay(Arc::clone(&controller), interval, tx);

    // The channel closes when the worker finishes or is cancelled
    for frame in rx {
        println!();
        println!("{}", format_trace_frame(&frame, len, &theme, color));
    }

    let status = worker
        .join()
        .map_err(|_| anyhow::anyhow!("Autoplay worker panicked"))?;

    println!();
    match status {
        AutoplayStatus::Cancelled => {
            let position = lock_controller(&controller).current_index();
            eprintln!("Stopped at step {}/{}.", position + 1, len);
        }
        _ => println!("{}", summary),
    }
    Ok(())
}

fn paint(color: bool, text: &str, style: impl Fn(&str) -> String) -> String {
    if color {
        style(text)
    } else {
        text.to_string()
    }
}
