// Simulated page host
//
// Reads commands from stdin and drives one page load at a time, reloading on
// request so stashed toasts can be watched crossing the reload:
//
//   toast <severity> <message>   show a toast on this page
//   stash <severity> <message>   leave a toast for the next load
//   act <message>                stash a success toast, then reload
//   dismiss                      close the visible toast
//   reload                       navigate to a fresh page load
//   quit                         end the browsing session

use ensemble_toasts::host;
use ensemble_toasts::{FileSessionStore, Page, TerminalDisplay};
use tokio::io::{AsyncBufReadExt, BufReader};

enum Command<'a> {
    Toast(&'a str, &'a str),
    Stash(&'a str, &'a str),
    Act(&'a str),
    Dismiss,
    Reload,
    Quit,
}

fn parse(line: &str) -> Option<Command<'_>> {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    match verb {
        "toast" | "stash" => {
            let (severity, message) = rest.split_once(' ')?;
            Some(if verb == "toast" {
                Command::Toast(severity, message)
            } else {
                Command::Stash(severity, message)
            })
        }
        "act" if !rest.is_empty() => Some(Command::Act(rest)),
        "dismiss" => Some(Command::Dismiss),
        "reload" => Some(Command::Reload),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    color_backtrace::install();
    host::init_logging();

    let config = host::load_config()?;
    let session = FileSessionStore::open(host::session_path());
    tracing::info!("session store at {}", session.path().display());

    let mut page = Page::load(&config, session, TerminalDisplay::new());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let Some(command) = parse(&line) else {
            if !line.trim().is_empty() {
                tracing::warn!("unknown command: {}", line.trim());
            }
            continue;
        };

        match command {
            Command::Toast(severity, message) => page.enqueue(message, severity),
            Command::Stash(severity, message) => page.stash_for_next_load(message, severity),
            Command::Act(message) => {
                let store = page.toast_after_reload(message, "success").await;
                page = Page::load(&config, store, TerminalDisplay::new());
            }
            Command::Dismiss => page.toasts().dismiss_current(),
            Command::Reload => {
                let store = page.navigate().await;
                page = Page::load(&config, store, TerminalDisplay::new());
            }
            Command::Quit => break,
        }
    }

    let store = page.navigate().await;
    store.end_session()?;
    Ok(())
}
