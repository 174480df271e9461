use clap::{command, Arg, ArgAction, ArgMatches, Command};
use color_eyre::Result;
use crossterm::style::{Color, Stylize};
use std::thread;
use std::time::Duration;
use theme_store::config::{default_log_file, Config, StorageKind};
use theme_store::logger::setup_logger;
use theme_store::theme::{get_theme, get_theme_names, Palette, ThemeName};
use theme_store::ThemeStore;

fn theme_arg(required: bool) -> Arg {
    let names: Vec<&str> = get_theme_names().iter().map(ThemeName::as_str).collect();
    Arg::new("name")
        .required(required)
        .value_parser(|s: &str| s.parse::<ThemeName>())
        .help(format!("One of: {}", names.join(", ")))
}

fn cli() -> Command {
    command!()
        .subcommand_required(true)
        .arg(
            Arg::new("headless")
                .long("headless")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Run without persisted storage"),
        )
        .subcommand(Command::new("list").about("List registered themes"))
        .subcommand(
            Command::new("show")
                .about("Print every color role of a theme")
                .arg(theme_arg(false)),
        )
        .subcommand(Command::new("current").about("Print the current theme"))
        .subcommand(
            Command::new("switch")
                .about("Select and persist a theme")
                .arg(theme_arg(true)),
        )
}

fn print_palette(palette: &Palette) {
    println!("{}", palette.name);
    for (role, value) in palette.colors.roles() {
        let (r, g, b) = value.rgb();
        println!("  {}  {role:<22} {value}", "    ".on(Color::Rgb { r, g, b }));
    }
}

fn run(matches: &ArgMatches, store: &mut ThemeStore) {
    match matches.subcommand() {
        Some(("list", _)) => {
            for name in get_theme_names() {
                let marker = if name == store.get() { '*' } else { ' ' };
                println!("{marker} {name}");
            }
        }
        Some(("show", sub)) => {
            let palette = match sub.get_one::<ThemeName>("name") {
                Some(&name) => get_theme(name),
                None => store.current_palette(),
            };
            print_palette(palette);
        }
        Some(("current", _)) => println!("{}", store.get()),
        Some(("switch", sub)) => {
            if let Some(&name) = sub.get_one::<ThemeName>("name") {
                store.switch_theme(name);
                println!("{name}");
            }
        }
        _ => unreachable!("subcommand_required is set"),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let matches = cli().get_matches();

    let mut config = Config::load()?;
    if matches.get_flag("headless") {
        config.storage = StorageKind::None;
    }
    setup_logger(config.log_level, default_log_file().as_deref());

    let mut store = config.open_store(ThemeName::default());
    store.subscribe(|name| log::debug!("Active theme: {name}"));
    store.initialize_theme();

    run(&matches, &mut store);

    // tui-logger writes the file from its own thread every 10 ms; give it one
    // more pass so the last records are not lost on exit.
    thread::sleep(Duration::from_millis(20));
    Ok(())
}
