use super::render::{print_messages, render_student_list, EMPTY_ROSTER_MESSAGE};
use super::setup::{Cli, Commands};
use clap::Parser;
use log::LevelFilter;
use students::api::{CmdMessage, FilterOutcome, StudentsApi};
use students::config::{resolve_data_path, DATA_ENV_VAR, DEFAULT_MARK_THRESHOLD};
use students::error::Result;
use students::index::index_students;
use students::store::fs::FileStore;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let path = resolve_data_path(cli.data.clone(), std::env::var_os(DATA_ENV_VAR))?;
    log::debug!("using data file {}", path.display());
    let mut api = StudentsApi::open(FileStore::new(path))?;

    match cli.command {
        Commands::Add { name, group, mark } => handle_add(&mut api, name, group, mark)?,
        Commands::List => handle_list(&api)?,
        Commands::Filter => handle_filter(&api)?,
    }

    api.flush()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .try_init();
}

fn handle_add(
    api: &mut StudentsApi<FileStore>,
    name: String,
    group: Option<i64>,
    mark: i64,
) -> Result<()> {
    let result = api.add_student(name, group, mark)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &StudentsApi<FileStore>) -> Result<()> {
    let result = api.list_students()?;
    print!("{}", render_student_list(&result.listed_students));
    print_messages(&result.messages);
    Ok(())
}

fn handle_filter(api: &StudentsApi<FileStore>) -> Result<()> {
    match api.filter_students(DEFAULT_MARK_THRESHOLD)? {
        FilterOutcome::EmptyInput => print_messages(&[CmdMessage::info(EMPTY_ROSTER_MESSAGE)]),
        FilterOutcome::Matched(students) => {
            print!("{}", render_student_list(&index_students(students)))
        }
    }
    Ok(())
}
