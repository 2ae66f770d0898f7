// std imports
use std::{
    fs::File,
    io::{self, IsTerminal, Read, Write, stderr, stdin, stdout},
    path::PathBuf,
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use slicep::{
    Error, Result,
    cli::{self, ColorOption},
    config,
    output::{write_node, write_tokens},
    parse_named,
    settings::Settings,
};

const SLICEP_DEBUG_LOG: &str = "SLICEP_DEBUG_LOG";
const SLICEP_DEBUG_LOG_STYLE: &str = "SLICEP_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(SLICEP_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(SLICEP_DEBUG_LOG).write_style(SLICEP_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run(opt: &cli::Opt, colored: bool) -> Result<bool> {
    let (configs, no_default) = opt.config_files();
    let settings = config::at(configs).no_default(no_default).load()?;
    log::debug!("settings: {:?}", settings);

    let mut out = stdout().lock();
    let mut ok = true;

    let stdin_only = [PathBuf::from("-")];
    let files = if opt.files.is_empty() { &stdin_only[..] } else { &opt.files[..] };

    for path in files {
        let result = if path.as_os_str() == "-" {
            process_input(opt, &settings, &mut out, &settings.stdin_name, stdin().lock())
        } else {
            let name = path.display().to_string();
            match File::open(path) {
                Ok(file) => process_input(opt, &settings, &mut out, &name, file),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::FileNotFound { filename: name }),
                Err(e) => Err(e.into()),
            }
        };

        match result {
            Ok(()) => {}
            Err(e) if e.is_input_error() => {
                ok = false;
                e.log_to(&mut stderr(), colored)?;
            }
            Err(e) => return Err(e),
        }
    }

    out.flush()?;
    Ok(ok)
}

fn process_input<R: Read, W: Write>(
    opt: &cli::Opt,
    settings: &Settings,
    out: &mut W,
    name: &str,
    reader: R,
) -> Result<()> {
    if opt.tokens {
        return write_tokens(out, name, reader);
    }

    let node = parse_named(name, reader)?;
    write_node(out, &node, opt.output_format.unwrap_or(settings.output_format))
}

fn main() {
    bootstrap();

    let opt = cli::Opt::parse();
    let colored = match opt.color {
        ColorOption::Auto => stderr().is_terminal(),
        ColorOption::Always => true,
        ColorOption::Never => false,
    };

    match run(&opt, colored) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            err.log_to(&mut stderr(), colored).ok();
            process::exit(2);
        }
    }
}
