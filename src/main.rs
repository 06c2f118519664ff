use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use torrust_swarm::common::common::setup_logging;
use torrust_swarm::config::structs::configuration::Configuration;
use torrust_swarm::metainfo::structs::static_metainfo::StaticMetainfo;
use torrust_swarm::reactor::structs::stop_signal::StopSignal;
use torrust_swarm::structs::Cli;
use torrust_swarm::swarm::swarm::run_swarm;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("[ERROR] {e}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let metainfo = match StaticMetainfo::from_config(&config.torrent) {
        Ok(metainfo) => metainfo,
        Err(e) => {
            error!("[BOOT] {e}");
            exit(101);
        }
    };
    info!("[BOOT] Torrent {} ({} bytes, {} pieces) via {}", metainfo.info_hash, metainfo.total_length, metainfo.num_pieces, metainfo.announce);

    let stop = StopSignal::new();
    let outcome = Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let swarm_config = config.clone();
            let swarm_stop = stop.clone();
            let mut swarm = tokio::task::spawn_blocking(move || {
                run_swarm(&swarm_config, &metainfo, swarm_stop)
            });

            tokio::select! {
                result = &mut swarm => result,
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, stopping the reactor...");
                    stop.trigger();
                    swarm.await
                }
            }
        });

    match outcome {
        Ok(Ok(report)) => {
            info!("[SWARM] Done: {report}");
            Ok(())
        }
        Ok(Err(e)) => {
            error!("[SWARM] {e}");
            exit(1)
        }
        Err(e) => {
            error!("[SWARM] Worker failed: {e}");
            exit(1)
        }
    }
}
