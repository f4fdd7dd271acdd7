//! Interactive search loop.
//!
//! Each stdin line is either search text or a `:command`. Search text goes
//! through a [`Debouncer`] so fast typists (or pasted bursts) cause one
//! filter pass; any `:command` flushes the pending text first so commands
//! always act on what was typed before them.
//!
//! Stdin is read on its own thread and fed through a channel, letting the
//! main loop wait with `recv_timeout` until the debounce deadline.

use super::render::{render_categories, render_search_view};
use blogsift::debounce::Debouncer;
use blogsift::error::Result;
use blogsift::init::SiftContext;
use blogsift::session::SearchSession;
use blogsift::view::{Analytics, History, ReplaceHistory, SearchView, TracingAnalytics, View};
use console::Term;
use std::io::BufRead;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Instant;

const HELP: &str = "\
Type to search. Commands:
  :s <term>   search now, skipping the typing delay
  :c <name>   select a category (:c alone shows all posts)
  :cats       list categories
  :p <n>      go to page n
  :n, :next   next page
  :prev       previous page
  :clear      reset search, category and page
  :help       show this help
  :q, :quit   exit";

/// Draws every refresh to stdout, clearing the screen first on a terminal.
pub struct TerminalView {
    term: Term,
    page_size: usize,
    use_color: bool,
}

impl TerminalView {
    pub fn new(page_size: usize, use_color: bool) -> Self {
        Self {
            term: Term::stdout(),
            page_size,
            use_color,
        }
    }
}

impl View for TerminalView {
    fn render(&mut self, view: &SearchView) {
        if self.term.is_term() {
            let _ = self.term.clear_screen();
        }
        match render_search_view(view, self.page_size, self.use_color) {
            Ok(out) => println!("{}\n", out),
            Err(e) => tracing::error!(error = %e, "failed to draw results"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Input(String),
    Search(String),
    Category(String),
    Categories,
    Page(usize),
    Next,
    Previous,
    Clear,
    Help,
    Quit,
    Invalid(String),
}

impl BrowseCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix(':') else {
            return BrowseCommand::Input(line.to_string());
        };
        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };
        match name {
            "q" | "quit" => BrowseCommand::Quit,
            "s" | "search" => BrowseCommand::Search(arg.to_lowercase()),
            "c" | "category" => BrowseCommand::Category(arg.to_string()),
            "cats" | "categories" => BrowseCommand::Categories,
            "p" | "page" => match arg.parse::<usize>() {
                Ok(page) => BrowseCommand::Page(page),
                Err(_) => BrowseCommand::Invalid(format!("Not a page number: {}", arg)),
            },
            "n" | "next" => BrowseCommand::Next,
            "prev" | "previous" => BrowseCommand::Previous,
            "clear" | "esc" => BrowseCommand::Clear,
            "help" | "h" | "?" => BrowseCommand::Help,
            _ => BrowseCommand::Invalid(format!("Unknown command: :{}", name)),
        }
    }
}

pub fn run(ctx: &SiftContext, query: Option<&str>, use_color: bool) -> Result<()> {
    let options = ctx.api.options();
    let view = TerminalView::new(options.page_size, use_color);
    let mut session = ctx
        .api
        .session(view, ReplaceHistory::default(), TracingAnalytics);
    session.restore(query.unwrap_or(""));
    println!("{}", HELP);

    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut debouncer = Debouncer::new(ctx.config.debounce());
    loop {
        let received = match debouncer.timeout(Instant::now()) {
            Some(wait) => rx.recv_timeout(wait),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(line) => match BrowseCommand::parse(&line) {
                BrowseCommand::Input(text) => debouncer.schedule(text, Instant::now()),
                command => {
                    if let Some(text) = debouncer.cancel() {
                        session.input(&text);
                    }
                    if !apply(&mut session, command, use_color) {
                        break;
                    }
                }
            },
            Err(RecvTimeoutError::Timeout) => {
                if let Some(text) = debouncer.poll(Instant::now()) {
                    session.input(&text);
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                if let Some(text) = debouncer.cancel() {
                    session.input(&text);
                }
                break;
            }
        }
    }

    tracing::debug!(url = session.history().current().unwrap_or(""), "browse finished");
    Ok(())
}

/// Runs one command against the session. Returns `false` to stop the loop.
fn apply<V: View, H: History, A: Analytics>(
    session: &mut SearchSession<V, H, A>,
    command: BrowseCommand,
    use_color: bool,
) -> bool {
    match command {
        BrowseCommand::Input(text) => session.input(&text),
        BrowseCommand::Category(category) => session.select_category(&category),
        BrowseCommand::Search(term) => session.perform_search(&term),
        BrowseCommand::Categories => {
            match render_categories(&session.snapshot().categories, use_color) {
                Ok(out) => print!("{}", out),
                Err(e) => tracing::error!(error = %e, "failed to draw categories"),
            }
        }
        BrowseCommand::Page(page) => session.go_to_page(page),
        BrowseCommand::Next => session.next_page(),
        BrowseCommand::Previous => session.previous_page(),
        BrowseCommand::Clear => session.clear(),
        BrowseCommand::Help => println!("{}", HELP),
        BrowseCommand::Invalid(message) => eprintln!("{}", message),
        BrowseCommand::Quit => return false,
    }
    true
}
