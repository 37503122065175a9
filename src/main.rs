use clap::Parser;
use harvest_image::Harvest;

mod args;
use args::{Args, convert_tags};

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging; -v raises the default level, RUST_LOG still wins
    let default_level = if args.verbose == 0 { "info" } else { "debug" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    ::log::info!("starting harvest for URL: {}", args.url);

    let mut harvest = Harvest::new(&args.url)
        .with_tags(convert_tags(&args.tags))
        .with_max_concurrency(args.concurrency);
    if let Some(class) = &args.class {
        harvest = harvest.with_class(class);
    }
    if let Some(id) = &args.id {
        harvest = harvest.with_id(id);
    }
    if let Some(out) = &args.out {
        harvest = harvest.with_out_dir(out);
    }
    if let Some(user_agent) = &args.user_agent {
        harvest = harvest.with_user_agent(user_agent);
    }

    // List mode prints the links and never touches the downloader
    if args.list {
        match harvest.collect_links().await {
            Ok(links) => {
                for link in links {
                    println!("{link}");
                }
            }
            Err(err) => {
                ::log::error!("{err}");
                std::process::exit(1);
            }
        }
        return;
    }

    match harvest.run().await {
        Ok(report) => {
            // Per-file failures were already logged; they do not change the
            // exit status of a run that got as far as downloading.
            ::log::info!("harvest complete: {report}");
        }
        Err(err) => {
            ::log::error!("{err}");
            std::process::exit(1);
        }
    }
}
