use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use url::Url;

use attendee_list::app::App;
use attendee_list::config::Settings;
use attendee_list::logging;
use attendee_list::services::Location;

/// One line of console input
#[derive(Debug, PartialEq)]
enum Command {
    Search(String),
    Page(u32),
    First,
    Previous,
    Next,
    Last,
    Open(Url),
    Back,
    Forward,
    Show,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

        match word {
            "search" | "s" => Some(Self::Search(rest.trim().to_string())),
            "page" | "p" => rest.trim().parse().ok().map(Self::Page),
            "first" => Some(Self::First),
            "prev" | "previous" => Some(Self::Previous),
            "next" | "n" => Some(Self::Next),
            "last" => Some(Self::Last),
            "open" => rest.trim().parse().ok().map(Self::Open),
            "back" => Some(Self::Back),
            "forward" => Some(Self::Forward),
            "" | "show" => Some(Self::Show),
            "quit" | "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

const HELP: &str = "commands: search <text> | page <n> | first | prev | next | last | open <url> | back | forward | show | quit";

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        start_url = %settings.start_url,
        "Starting attendee list"
    );

    let mut app = App::new(&settings)?;
    tracing::info!(endpoint = %app.controller.source().endpoint(), "Attendee endpoint");
    app.controller.refresh();

    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };

                match Command::parse(&line) {
                    Some(Command::Search(text)) => app.controller.search_changed(text),
                    Some(Command::Page(page)) => app.controller.page_changed(page),
                    Some(Command::First) => app.controller.go_first(),
                    Some(Command::Previous) => app.controller.go_previous(),
                    Some(Command::Next) => app.controller.go_next(),
                    Some(Command::Last) => app.controller.go_last(),
                    Some(Command::Open(url)) => {
                        app.location.push(url);
                        app.controller.location_changed();
                    }
                    Some(Command::Back) => {
                        if app.location.back() {
                            app.controller.location_changed();
                        }
                    }
                    Some(Command::Forward) => {
                        if app.location.forward() {
                            app.controller.location_changed();
                        }
                    }
                    Some(Command::Show) => {
                        println!("{}\n{}", app.location.href(), app.view());
                    }
                    Some(Command::Quit) => break,
                    None => println!("{HELP}"),
                }
            }
            settled = app.controller.settle(), if app.controller.is_loading() => {
                if settled.is_some() && !app.controller.is_loading() {
                    println!("{}\n{}", app.location.href(), app.view());
                }
            }
        }
    }

    Ok(())
}
