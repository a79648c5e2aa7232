use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use sunny_core::{App, AppError, SourceKind};
use sunny_ui::{bridge, render_text, GetawayModel};
use sunny_weather::{LocationSource, MockSource};

/// How often the UI loop drains the model's channel.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

const PROMPT: &str = "> type to filter, /clear, /refresh, /quit";

const REFRESH_BUSY: &str = "Still loading, refresh ignored.";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Filter(String),
    Clear,
    Refresh,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    match line.trim() {
        "/refresh" | "/r" => Command::Refresh,
        "/quit" | "/q" => Command::Quit,
        "/clear" => Command::Clear,
        cmd if cmd.starts_with('/') => Command::Unknown(cmd.to_string()),
        _ => Command::Filter(line.to_string()),
    }
}

/// Read stdin on its own thread so the UI loop never blocks on input.
/// The channel disconnects at end of input.
fn spawn_stdin_reader() -> mpsc::Receiver<Command> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    tracing::warn!("Failed to read input: {}", e);
                    break;
                }
            };
            let command = parse_command(&line);
            let quit = command == Command::Quit;
            if tx.send(command).is_err() || quit {
                break;
            }
        }
    });
    rx
}

fn draw<W: Write>(model: &GetawayModel, out: &mut W, clear: bool) -> io::Result<()> {
    if clear {
        write!(out, "\x1b[2J\x1b[H")?;
    }
    write!(out, "{}", render_text(&model.view()))?;
    writeln!(out, "{PROMPT}")?;
    out.flush()
}

fn build_source(app: &App) -> Arc<dyn LocationSource> {
    let loader = &app.config().loader;
    match loader.source {
        SourceKind::Mock => Arc::new(MockSource::new(loader.delay())),
    }
}

/// Mount the page and drive it until `/quit` or end of input.
///
/// The page is redrawn when a completion lands or a command changes it. Once
/// input is closed the pending request is allowed to finish and the final
/// page is drawn before returning.
async fn run_loop<W: Write>(
    model: &mut GetawayModel,
    input: &Receiver<Command>,
    out: &mut W,
    clear: bool,
) -> io::Result<()> {
    model.mount();
    draw(model, out, clear)?;

    let mut input_closed = false;
    loop {
        let mut dirty = model.poll_channel();
        let mut idle = true;

        if input_closed {
            if !model.is_loading() {
                if dirty {
                    draw(model, out, clear)?;
                }
                return Ok(());
            }
        } else {
            match input.try_recv() {
                Ok(command) => {
                    idle = false;
                    match command {
                        Command::Quit => return Ok(()),
                        Command::Refresh => {
                            if model.refresh() {
                                dirty = true;
                            } else {
                                writeln!(out, "{REFRESH_BUSY}")?;
                                out.flush()?;
                            }
                        }
                        Command::Clear => {
                            dirty |= !model.filter().is_empty();
                            model.set_filter("");
                        }
                        Command::Filter(text) => {
                            dirty |= model.filter() != text;
                            model.set_filter(text);
                        }
                        Command::Unknown(cmd) => {
                            tracing::warn!("Unknown command {}", cmd);
                        }
                    }
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => input_closed = true,
            }
        }

        if dirty {
            draw(model, out, clear)?;
        }
        if idle {
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

fn run() -> Result<(), AppError> {
    let mut app = App::new()?;
    app.initialize()?;

    let runtime = bridge::runtime_handle()?;
    let mut model = GetawayModel::new(build_source(&app), runtime.clone(), app.config().ui.clone());
    let input = spawn_stdin_reader();

    let mut stdout = io::stdout();
    let clear = stdout.is_terminal();
    runtime.block_on(run_loop(&mut model, &input, &mut stdout, clear))?;

    model.teardown();
    app.shutdown()?;

    Ok(())
}

/// Write the user-facing message for `err`, then its detail.
fn report<W: Write>(err: &AppError, out: &mut W) {
    let _ = writeln!(out, "sunny: {}", err.user_message());
    let _ = writeln!(out, "  {}", err);
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e, &mut io::stderr());
            ExitCode::FAILURE
        }
    }
}
