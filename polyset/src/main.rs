use clap::Parser;
use polyset::app::PolysetCliArguments;

fn main() {
    env_logger::init();
    let args = PolysetCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running polyset: {e}");
            std::process::exit(1);
        }
    }
}
