use clap::Parser;
use medal_table::utils::{logger, validation::Validate};
use medal_table::{CliConfig, EtlEngine, LocalStorage, MedalError, MedalPipeline};

fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            print!("{}", e);
            return;
        }
        Err(e) => {
            eprint!("{}", e);
            std::process::exit(1);
        }
    };

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            tracing::debug!("Run failed: {:?}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(config: &CliConfig) -> Result<String, MedalError> {
    let run_config = config.resolve()?;
    run_config.validate()?;

    let storage = LocalStorage::default();
    let pipeline = MedalPipeline::new(storage, run_config);
    EtlEngine::new(pipeline).run()
}
