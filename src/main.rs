use anyhow::{Context, Error};
use clap::{value_t, values_t, App, Arg, ArgMatches};
use log::info;

use roadsearch::graph::loader;
use roadsearch::report;
use roadsearch::{Strategy, DEFAULT_DEPTH_LIMIT};

use std::io::{self, Write};


fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = driver() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn driver() -> Result<(), Error> {
    let matches = App::new("roadsearch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compare route search strategies on a street map")
        .arg(
            Arg::with_name("locations")
                .value_name("LOCATIONS")
                .help("Location file, one `name x y` record per line")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("roads")
                .value_name("ROADS")
                .help("Road file, one `name from to cost` record per line")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("from")
                .value_name("FROM")
                .help("Name of the initial location")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("to")
                .value_name("TO")
                .help("Name of the destination location")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("depth-limit")
                .long("depth-limit")
                .short("d")
                .value_name("N")
                .help("Maximum search tree depth")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("strategy")
                .long("strategy")
                .short("s")
                .value_name("NAME")
                .help("Strategy to run, may be repeated (default: all)")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .possible_values(&["bfs", "dfs", "ucs", "greedy", "astar"]),
        )
        .get_matches();

    let depth_limit = if matches.is_present("depth-limit") {
        value_t!(matches, "depth-limit", usize).unwrap_or_else(|e| e.exit())
    } else {
        DEFAULT_DEPTH_LIMIT
    };

    let strategies = if matches.is_present("strategy") {
        values_t!(matches, "strategy", Strategy).unwrap_or_else(|e| e.exit())
    } else {
        Strategy::ALL.to_vec()
    };

    let locations = required(&matches, "locations")?;
    let roads = required(&matches, "roads")?;
    let map = loader::load_files(locations, roads)
        .with_context(|| format!("Unable to read map from {locations} and {roads}"))?;

    let from = required(&matches, "from")?;
    let to = required(&matches, "to")?;
    info!("searching from {from} to {to} with depth limit {depth_limit}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::compare(&mut out, &map, &strategies, from, to, depth_limit)?;
    out.flush()?;

    Ok(())
}

fn required<'a>(matches: &'a ArgMatches<'_>, name: &str) -> Result<&'a str, Error> {
    matches.value_of(name).with_context(|| format!("Missing argument {name}"))
}
