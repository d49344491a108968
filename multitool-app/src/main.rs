use anyhow::Result;
use multitool_app::commands::{classify, fs, links};
use multitool_app::{build_registry, logging, Config, ConsoleNotifier};

const USAGE: &str = "\
Usage: multitool <command> [args]

Commands:
  check-url <url>          Show whether a URL may be opened
  open <url>               Open an allowed URL in the default browser
  classify <message...>    Show the user-facing text for an error message
  check-path <path>        Warn when a path needs administrator rights
  delete <path> [label]    Delete a folder and report the outcome
  updates [--store]        Open the release page or the store listing
  config reset             Rewrite multitool.yaml with defaults";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("config")
        && args.get(1).map(String::as_str) == Some("reset")
    {
        return handle_config_reset();
    }

    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ Failed to load config: {:#}", e);
            eprintln!("💡 Tip: Run 'multitool config reset' to restore defaults");
            return Err(e);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("❌ Invalid configuration: {:#}", e);
        return Err(e);
    }
    logging::init(&config);

    let bridge = build_registry();
    let notifier = ConsoleNotifier;

    match (args.first().map(String::as_str), args.get(1)) {
        (Some("check-url"), Some(url)) => {
            if !links::check(url) {
                std::process::exit(1);
            }
        }
        (Some("open"), Some(url)) => links::open(&bridge, url).await?,
        (Some("classify"), Some(_)) => classify::run(&args[1..].join(" ")),
        (Some("check-path"), Some(path)) => {
            fs::check_path(&bridge, &config, &notifier, path).await;
        }
        (Some("delete"), Some(path)) => {
            let label = args.get(2).map(String::as_str);
            if !fs::delete(&bridge, &notifier, path, label).await {
                std::process::exit(1);
            }
        }
        (Some("updates"), flag) => {
            let store = flag.map(String::as_str) == Some("--store");
            links::updates(&bridge, &config, store).await?;
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}

fn handle_config_reset() -> Result<()> {
    println!("Resetting configuration...");
    Config::default().save()?;
    println!("✅ Configuration reset: {}", Config::path().display());
    Ok(())
}
