use lingocards::app::{App, ViewState};
use lingocards::client::FlashcardClient;
use lingocards::config::AppConfig;
use lingocards::{logging, plain, LingoError, Result};

const USAGE: &str = "\
Usage: lingocards [OPTIONS]

Options:
  --plain            Prompt-driven mode instead of the full-screen UI
  --endpoint <URL>   Generation endpoint for this session
  --write-config     Write the effective configuration file and exit
  -h, --help         Print this help";

#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    plain: bool,
    endpoint: Option<String>,
    write_config: bool,
    help: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options> {
    let mut options = Options::default();
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--plain" => options.plain = true,
            "--write-config" => options.write_config = true,
            "-h" | "--help" => options.help = true,
            "--endpoint" => {
                let url = args.next().ok_or_else(|| {
                    LingoError::ConfigError("--endpoint requires a URL".to_string())
                })?;
                options.endpoint = Some(url);
            }
            other => {
                return Err(LingoError::ConfigError(format!(
                    "Unknown argument '{}'\n\n{}",
                    other, USAGE
                )))
            }
        }
    }
    Ok(options)
}

#[tokio::main]
async fn main() -> Result<()> {
    let options = parse_args(std::env::args())?;
    if options.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut config = AppConfig::load()?;
    if let Some(endpoint) = options.endpoint {
        config = config.with_endpoint(endpoint);
        config.validate()?;
    }

    if options.write_config {
        let path = config.save()?;
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    // The UI still works when the log file can't be opened
    if let Err(e) = logging::init(&config.log_level) {
        eprintln!("Logging disabled: {}", e);
    }

    if options.plain {
        let client = FlashcardClient::new(&config.endpoint)?;
        let mut state = ViewState::new(&config.source_language, &config.target_language);
        return plain::run(&client, &mut state).await;
    }

    let mut app = App::new(&config)?;
    app.init()?;
    app.run().await
}
