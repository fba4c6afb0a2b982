#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use rtw_cli::extensions::solve::config::{Config, create_builder_from_config, read_config};
use rtw_core::prelude::*;
use rtw_core::utils::Timer;
use std::io::BufReader;

pub const CITY_ARG_NAME: &str = "CITY";
pub const DATASET_ARG_NAME: &str = "dataset";
pub const FORMAT_ARG_NAME: &str = "format";
pub const OUT_RESULT_ARG_NAME: &str = "out-result";
pub const CONFIG_ARG_NAME: &str = "config";
pub const THREADS_ARG_NAME: &str = "threads";
pub const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Finds the shortest route around the world which starts and ends at given city")
        .arg(Arg::new(CITY_ARG_NAME).help("Specifies the origin city code").required(true).index(1))
        .arg(
            Arg::new(DATASET_ARG_NAME)
                .help("Specifies path to the file with cities")
                .short('d')
                .long(DATASET_ARG_NAME)
                .required(false)
                .default_value("cities.json"),
        )
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies result output format")
                .short('f')
                .long(FORMAT_ARG_NAME)
                .required(false)
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(THREADS_ARG_NAME)
                .help("Specifies amount of worker threads, overrides configuration value")
                .short('t')
                .long(THREADS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether search progress should be logged, overrides configuration value")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
}

pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let city_code =
        matches.get_one::<String>(CITY_ARG_NAME).ok_or_else(|| GenericError::from("origin city is not set"))?;
    let dataset_path =
        matches.get_one::<String>(DATASET_ARG_NAME).ok_or_else(|| GenericError::from("dataset path is not set"))?;
    let format = matches.get_one::<String>(FORMAT_ARG_NAME).map(String::as_str).unwrap_or("text");
    let threads = parse_int_value::<usize>(matches, THREADS_ARG_NAME, "amount of threads")?;
    let is_logging = matches.get_flag(LOG_ARG_NAME);

    let config = get_config(matches, threads, is_logging)?;
    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    let (dataset, duration) = Timer::measure_duration(|| {
        open_file(dataset_path, "dataset")
            .and_then(|file| BufReader::new(file).read_dataset().map_err(GenericError::from))
    });
    let dataset = dataset?;

    if is_logging {
        println!("dataset with {} cities is loaded in {}ms", dataset.len(), duration.as_millis());
    }

    let origin = dataset.get_city(city_code)?;
    let continents = dataset.get_continents();

    let mut optimizer = create_builder_from_config(&config)?.build();
    let (best_path, metrics) = optimizer.solve(origin, &continents)?;

    let writer = out_writer_func(out_result);
    match format {
        "json" => best_path.write_json(metrics.as_ref(), writer),
        _ => best_path.write_text(writer),
    }
    .map_err(GenericError::from)
}

fn get_config(matches: &ArgMatches, threads: Option<usize>, is_logging: bool) -> GenericResult<Config> {
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .transpose()?
        .unwrap_or_default();

    let config = if is_logging { config.with_logging() } else { config };
    let config = if let Some(threads) = threads { config.with_threads(threads) } else { config };

    Ok(config)
}
