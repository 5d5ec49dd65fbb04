/// Scenario player entry point for native builds
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use mjolnir::{Options, USAGE};

    let options = match Options::parse(pico_args::Arguments::from_env()) {
        Ok(Some(options)) => options,
        Ok(None) => {
            println!("{}", USAGE);
            return;
        }
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&options) {
        eprintln!("Playground error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run(options: &mjolnir::Options) -> mjolnir::Result<()> {
    use mjolnir::{Playground, PlaygroundConfig, Scenario};

    let config = match &options.config {
        Some(path) => PlaygroundConfig::load(path)?,
        None => PlaygroundConfig::default(),
    };

    // RUST_LOG overrides the configured level
    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();
    log::debug!("Configuration: {:?}", config);

    let scenario = Scenario::load(&options.scenario)?;
    let mut playground = Playground::new(&scenario, &config);
    playground.run(&scenario.steps);

    for record in playground.records() {
        let event = format!("{:?}", record.event);
        println!("{:>6} ms  {:<15} top line {}", record.at_ms, event, record.top_line);
    }
    let document = playground.document();
    println!(
        "final: top line {} of {} ({} visible), progress {:.3}",
        document.top_line(),
        document.lines(),
        document.visible_lines(),
        playground.scrollbar().progress()
    );

    if let Some(path) = &options.png {
        playground.render()?.save_png(path)?;
        log::info!("Wrote final frame to {:?}", path);
    }

    Ok(())
}

// The playground is native only
#[cfg(target_arch = "wasm32")]
fn main() {}
