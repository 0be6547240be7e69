//! Terminal player for Miniword.
//!
//! Reads one command per line from standard input and redraws the board
//! after each move. Type `help` for the list of commands.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin miniword -- --puzzle 1
//! RUST_LOG=debug cargo run --bin miniword
//! cargo run --bin miniword -- --list
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io::{self, BufRead as _, Write as _};

    use clap::Parser;
    use miniword_app::{
        command::{Command, CommandError},
        text_view::BoardView,
    };
    use miniword_game::{Catalog, CompletionStatus, Crossword, GameError};

    #[derive(Debug, Parser)]
    #[command(author, version, about)]
    struct Args {
        /// Catalog index of the puzzle to start with.
        #[arg(short, long, value_name = "INDEX", default_value_t = 0)]
        puzzle: usize,

        /// Log level; overrides `RUST_LOG`.
        #[arg(long, value_name = "LEVEL")]
        log_level: Option<log::LevelFilter>,

        /// Print the puzzle catalog and exit.
        #[arg(long)]
        list: bool,
    }

    #[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
    enum AppError {
        #[display("{_0}")]
        #[from]
        Game(GameError),
        #[display("failed to access the terminal: {_0}")]
        #[from]
        Io(io::Error),
    }

    pub(super) fn main() -> std::process::ExitCode {
        better_panic::install();
        let args = Args::parse();

        let mut logger = env_logger::Builder::from_default_env();
        if let Some(level) = args.log_level {
            logger.filter_level(level);
        }
        logger.init();

        match run(&args) {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("error: {err}");
                std::process::ExitCode::FAILURE
            }
        }
    }

    fn run(args: &Args) -> Result<(), AppError> {
        let catalog = Catalog::builtin()?;
        if args.list {
            for (index, puzzle) in catalog.iter().enumerate() {
                println!("{index}: {}", puzzle.title());
            }
            return Ok(());
        }

        let mut game = Crossword::new(catalog, args.puzzle)?;
        println!("{}\n", BoardView::new(&game));
        println!("{}", Command::HELP);

        let mut stdout = io::stdout();
        let mut lines = io::stdin().lock().lines();
        loop {
            print!("> ");
            stdout.flush()?;
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => execute(&mut game, command),
                Err(CommandError::Empty) => {}
                Err(err) => eprintln!("{err}"),
            }
        }
        Ok(())
    }

    fn execute(game: &mut Crossword, command: Command) {
        match command {
            Command::Click(pos) => {
                game.on_cell_clicked(pos);
                println!("{}", BoardView::new(game));
            }
            Command::Type(pos, text) => match game.on_cell_edited(pos, &text) {
                Ok(outcome) => {
                    println!("{}", BoardView::new(game));
                    match outcome.completion {
                        CompletionStatus::Incomplete => {}
                        CompletionStatus::Solved => {
                            println!("Solved! Type `next` for another puzzle.");
                        }
                        CompletionStatus::Unsolved { .. } => {
                            println!("Every cell is filled, but something is wrong.");
                        }
                    }
                }
                Err(err) => eprintln!("{err}"),
            },
            Command::Key(pos, key) => {
                let outcome = game.on_directional_key(pos, key);
                if outcome.next_focus.is_none() && outcome.cleared.is_none() {
                    println!("(focus stays at {pos})");
                }
                println!("{}", BoardView::new(game));
            }
            Command::Hint => match game.request_hint() {
                Some(hint) => println!("hint for {}: {}", hint.clue, hint.text),
                None => println!("no hint available"),
            },
            Command::Verify => {
                let verification = game.verify_now();
                println!("{}", BoardView::new(game).with_verification(&verification));
                let wrong = verification.incorrect().count();
                println!("{wrong} cell(s) wrong or empty");
            }
            Command::Load(index) => {
                let loaded = game.load_puzzle(index).map(|_| ());
                show_loaded(game, loaded);
            }
            Command::Next => {
                let loaded = game.next_puzzle().map(|_| ());
                show_loaded(game, loaded);
            }
            Command::Show => println!("{}", BoardView::new(game)),
            Command::Help => println!("{}", Command::HELP),
            Command::Quit => {}
        }
    }

    fn show_loaded(game: &Crossword, loaded: Result<(), GameError>) {
        match loaded {
            Ok(()) => println!("{}", BoardView::new(game)),
            Err(err) => eprintln!("{err}"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The page drives the game through `miniword_app::web::WebCrossword`.
}
