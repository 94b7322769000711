use atelye::layout::Layout;
use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};
use colored::Colorize;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("new")
                .about("Scaffolds a new practice component from the starter template")
                .arg(
                    Arg::new("name")
                        .help("component name, e.g. 04-modal-dialog")
                        .required(true),
                ),
        )
        .subcommand(Command::new("list").about("Lists components already present in the collection"))
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("new", args)) => handle_new(args),
        Some(("list", _)) => handle_list(),
        _ => unreachable!(),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn handle_new(args: &ArgMatches) -> miette::Result<()> {
    let name = args.get_one::<String>("name").expect("name required");

    let layout = Layout::from_executable()?;

    atelye::api::create_component(&layout, name)?;

    Ok(())
}

fn handle_list() -> miette::Result<()> {
    let layout = Layout::from_executable()?;

    let names = atelye::api::list_components(&layout)?;

    if names.is_empty() {
        println!("no components yet");

        return Ok(());
    }

    for name in names {
        println!("{}", name.green());
    }

    Ok(())
}
