// SPDX-License-Identifier: MPL-2.0
use panel_kit::app::{config, paths};
use panel_kit::error::{Error, Result};
use panel_kit::http::{Client, Params, Payload, ResponseBody};
use panel_kit::i18n;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
panel-kit

USAGE:
  panel-kit [OPTIONS] <COMMAND>

COMMANDS:
  locale                   Print the locale pages would use
  set-locale <TAG>         Store the preferred locale
  get <PATH> [KEY=VALUE]   Send a GET request with query parameters
  post <PATH> <BODY>       Send a POST request (BODY is sent as-is)

OPTIONS:
  --lang <TAG>             Override the locale for this run
  --config-dir <DIR>       Directory holding settings.toml
  --base-url <URL>         Override the configured backend URL
  --json                   Parse the POST body as JSON before sending
  -h, --help               Print this help
";

struct Flags {
    lang: Option<String>,
    config_dir: Option<String>,
    base_url: Option<String>,
    json: bool,
    command: Vec<String>,
}

fn parse_flags() -> std::result::Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        base_url: args.opt_value_from_str("--base-url")?,
        json: args.contains("--json"),
        command: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .collect(),
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match run(flags).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ Error::Usage(_)) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(flags: Flags) -> Result<()> {
    paths::init_cli_override(flags.config_dir.clone());
    let (mut config, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!(%warning, "using default settings");
    }

    let mut command = flags.command.into_iter();
    match command.next().as_deref() {
        Some("locale") => {
            println!("{}", i18n::detect_locale(flags.lang.as_deref(), &config));
            Ok(())
        }
        Some("set-locale") => {
            let tag = command.next().ok_or_else(|| usage("set-locale needs a locale tag"))?;
            config.general.language = Some(i18n::LocaleTag::new(&tag).to_string());
            config::save(&config)
        }
        Some("get") => {
            let path = command.next().ok_or_else(|| usage("get needs a path"))?;
            let params = command
                .map(|pair| match pair.split_once('=') {
                    Some((key, value)) => (key.to_string(), value.to_string()),
                    None => (pair, String::new()),
                })
                .collect::<Params>();
            let client = client(&config, flags.base_url)?;
            print_body(client.get(&path, &params).await?)
        }
        Some("post") => {
            let path = command.next().ok_or_else(|| usage("post needs a path"))?;
            let body = command.next().unwrap_or_default();
            let payload = if flags.json {
                Payload::from(serde_json::from_str::<serde_json::Value>(&body)?)
            } else {
                Payload::Text(body)
            };
            let client = client(&config, flags.base_url)?;
            print_body(client.post(&path, payload).await?)
        }
        Some(other) => Err(usage(&format!("unknown command `{other}`"))),
        None => {
            print!("{HELP}");
            Ok(())
        }
    }
}

fn client(config: &config::Config, base_url: Option<String>) -> Result<Client> {
    let mut client = Client::from_config(&config.http)?;
    if let Some(base_url) = base_url {
        client.set_base_url(base_url);
    }
    Ok(client)
}

fn print_body(body: ResponseBody) -> Result<()> {
    match body {
        ResponseBody::Json(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        ResponseBody::Text(text) => println!("{text}"),
    }
    Ok(())
}

fn usage(message: &str) -> Error {
    Error::Usage(message.to_string())
}
