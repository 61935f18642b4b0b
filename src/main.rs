use clap::Parser;
use excel_matcher::utils::{logger, validation::Validate};
use excel_matcher::{CliConfig, MatchEngine, MatchPipeline, XlsxSink, XlsxSource};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting excel-matcher");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let input_path = match config.resolve_input_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("File not found or invalid path.");
            std::process::exit(1);
        }
    };

    let source = XlsxSource::new(input_path.clone());
    let sink = XlsxSink::new();
    let pipeline = MatchPipeline::new(source, sink, config, input_path);
    let engine = MatchEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            println!("Processing completed successfully!");
            println!("Output file created: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Matching run failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
