use std::io::IsTerminal;
use std::process::ExitCode;

use itertools::Itertools;
use plane_geom::{
    config::{Config, DEFAULT_LOG_LEVEL},
    debug::debug_with,
    info_label, item, item_dbg,
    plot::Plot,
    report::Report,
};
use tracing::{error, info};

pub fn main() -> ExitCode {
    let config = Config::from_env();
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(
            config.as_ref().map_or(DEFAULT_LOG_LEVEL, |c| c.log_level),
        )
        // keep stdout for the report itself
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    info!("{} {:?}", info_label!("config"), config);

    let report = Report::demo();
    info!(
        "{} {:?}",
        info_label!("quadrants"),
        debug_with(|f| {
            f.write_str(
                &report
                    .quadrants()
                    .into_iter()
                    .map(|(label, quadrant)| item!(label, quadrant))
                    .join(", "),
            )
        })
    );
    info!(
        "{} {} {}",
        info_label!("vectors"),
        item_dbg!(report.vectors()),
        item_dbg!("rect", report.rect)
    );
    if std::io::stdout().is_terminal() {
        println!("{}", report.styled());
    } else {
        println!("{}", report);
    }

    if !config.write_plot {
        info!("{} plot disabled", info_label!("skip"));
        return ExitCode::SUCCESS;
    }

    let plot = Plot::new(config.plot)
        .with_points(report.points().cloned())
        .with_rect(report.rect);
    match plot.save(&config.out_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, path = %config.out_path.display(), "could not save plot");
            ExitCode::FAILURE
        }
    }
}
