use std::process::ExitCode;

use clap::{Parser, Subcommand};

use board_client::api::types::{Article, JoinRequest};
use board_client::commands;
use board_client::config::ClientConfig;
use board_client::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "board", about = "Command-line client for the board backend")]
struct Args {
    /// Backend base URL (overrides BOARD_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Authenticate and store the session in the keychain
    Login {
        #[arg(long)]
        login_id: String,
        #[arg(long)]
        login_pw: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in member
    Whoami,
    /// Register a new member
    Join {
        #[arg(long)]
        login_id: String,
        #[arg(long)]
        login_pw: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        nickname: String,
        #[arg(long)]
        cellphone_no: String,
        #[arg(long)]
        email: String,
    },
    /// List the articles of a board
    List {
        #[arg(long)]
        board_id: u64,
    },
    /// Show one article
    Show { id: u64 },
    /// Write a new article
    Write {
        #[arg(long)]
        board_id: u64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    env_logger::init();

    let args = Args::parse();

    let mut config = ClientConfig::from_env();
    if let Some(url) = args.api_url {
        config.base_url = url;
    }
    log::debug!("Using API base URL {}", config.base_url);

    let state = AppState::new(&config);
    let result = run(&state, args.command).await;

    // A rejected session wins over the command's own outcome.
    if let Some(path) = state.navigator.take_redirect() {
        eprintln!("Session is no longer valid ({}). Run `board login` to sign in again.", path);
        return ExitCode::from(2);
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(state: &AppState, command: Command) -> Result<(), String> {
    match command {
        Command::Login { login_id, login_pw } => {
            let session = commands::login(state, &login_id, &login_pw).await?;
            println!(
                "Logged in as {} ({}), member #{}",
                session.member_nickname, session.member_name, session.member_id
            );
        }
        Command::Logout => {
            commands::logout(state)?;
            println!("Logged out");
        }
        Command::Whoami => match commands::whoami(state)? {
            Some(session) => println!(
                "{} ({}), member #{}",
                session.member_nickname, session.member_name, session.member_id
            ),
            None => println!("Not logged in"),
        },
        Command::Join {
            login_id,
            login_pw,
            name,
            nickname,
            cellphone_no,
            email,
        } => {
            let request = JoinRequest {
                login_id,
                login_pw,
                name,
                nickname,
                cellphone_no,
                email,
            };
            let id = commands::join(state, &request).await?;
            println!("Registered member #{}", id);
        }
        Command::List { board_id } => {
            let articles = commands::list_articles(state, board_id).await?;
            if articles.is_empty() {
                println!("No articles");
            }
            for article in &articles {
                println!("{}", summary_line(article));
            }
        }
        Command::Show { id } => {
            let article = commands::show_article(state, id).await?;
            println!("{}", summary_line(&article));
            println!("{}", article.reg_date);
            println!();
            println!("{}", article.body);
        }
        Command::Write {
            board_id,
            title,
            body,
        } => {
            let id = commands::write_article(state, board_id, &title, &body).await?;
            println!("Created article #{}", id);
        }
    }
    Ok(())
}

fn summary_line(article: &Article) -> String {
    match &article.writer_name {
        Some(writer) => format!("#{} {} [{}]", article.id, article.title, writer),
        None => format!("#{} {}", article.id, article.title),
    }
}
