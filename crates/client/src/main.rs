//! `notekeeper` -- terminal front end for the notes server.
//!
//! Reads one command per line from stdin and redraws the current view
//! after each one. Type `help` for the command list.
//!
//! # Environment variables
//!
//! | Variable                  | Default                        | Description            |
//! |---------------------------|--------------------------------|------------------------|
//! | `NOTEKEEPER_API_URL`      | `http://localhost:3000/api/v1` | API root               |
//! | `NOTEKEEPER_TIMEOUT_SECS` | `10`                           | Per-request timeout    |
//! | `RUST_LOG`                | `notekeeper_client=info`       | Log filter (stderr)    |

use std::io::{self, BufRead, Write};

use anyhow::Context;
use notekeeper_client::api::{NotesApi, NotesBackend};
use notekeeper_client::app::{NotesApp, Prompt};
use notekeeper_client::commands::{Command, HELP};
use notekeeper_client::config::ClientConfig;
use notekeeper_client::view;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Dialogs over stdin/stdout.
struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn alert(&mut self, message: &str) {
        println!("! {message}");
    }

    fn confirm(&mut self, message: &str) -> bool {
        print!("{message} [y/N] ");
        let _ = io::stdout().flush();
        match read_line() {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }
}

/// Next line from stdin, or `None` at end of input.
fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    Ok((read > 0).then_some(line))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notekeeper_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(api_url = %config.api_url, timeout_secs = config.timeout_secs, "Starting notekeeper");

    let api = NotesApi::new(&config).context("failed to build HTTP client")?;
    let mut app = NotesApp::new(api);
    let mut prompt = TerminalPrompt;

    app.refresh().await;
    print!("{}", view::render(&app));

    loop {
        print!("> ");
        io::stdout().flush().context("failed to write to stdout")?;

        let Some(line) = read_line().context("failed to read from stdin")? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        if !run_command(&mut app, &mut prompt, command).await {
            break;
        }
    }

    Ok(())
}

/// Apply one command and redraw. Returns `false` on quit.
async fn run_command<B: NotesBackend>(
    app: &mut NotesApp<B>,
    prompt: &mut TerminalPrompt,
    command: Command,
) -> bool {
    match command {
        Command::Quit => return false,
        Command::Help => {
            println!("{HELP}");
            return true;
        }
        Command::List => app.refresh().await,
        Command::ToggleView => app.toggle_view().await,
        Command::SetTitle(_)
        | Command::SetContent(_)
        | Command::SetCategories(_)
        | Command::Save
            if !app.form_available() =>
        {
            prompt.alert("The form is only available on the active view");
        }
        Command::SetTitle(text) => app.form.title = text,
        Command::SetContent(text) => app.form.content = text,
        Command::SetCategories(text) => app.form.categories = text,
        Command::Save => {
            app.submit(prompt).await;
        }
        Command::Edit(id) => {
            if !app.start_editing(id) {
                prompt.alert(&format!("Cannot edit note {id} in this view"));
            }
        }
        Command::Cancel => app.cancel_editing(),
        Command::ToggleArchive(id) => {
            app.toggle_archive(id, prompt).await;
        }
        Command::Delete(id) => {
            app.delete(id, prompt).await;
        }
        Command::Filter(text) if text.is_empty() => app.clear_filter(),
        Command::Filter(text) => app.set_filter(text),
    }

    print!("{}", view::render(app));
    true
}
