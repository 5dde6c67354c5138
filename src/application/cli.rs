use std::io;

use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::services::help_text;
use crate::domain::services::CredentialStore;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn arg_model() -> Arg {
    return Arg::new(ConfigKey::Model.to_string())
        .short('m')
        .long(ConfigKey::Model.to_string())
        .env("PARLOR_MODEL")
        .num_args(1)
        .help(format!(
            "The Gemini model to chat with. Any valid model id is accepted. [default: {}]",
            ConfigKey::Model.default_value()
        ));
}

fn arg_gemini_token() -> Arg {
    return Arg::new(ConfigKey::GeminiToken.to_string())
        .long(ConfigKey::GeminiToken.to_string())
        .env("GEMINI_API_KEY")
        .num_args(1)
        .help("Gemini API key. Falls back to the key remembered from a previous run.");
}

fn arg_no_remember() -> Arg {
    return Arg::new("no-remember")
        .long("no-remember")
        .action(ArgAction::SetTrue)
        .help("Do not keep the Gemini API key on disk between runs.");
}

fn arg_starter() -> Arg {
    return Arg::new(ConfigKey::Starter.to_string())
        .short('s')
        .long(ConfigKey::Starter.to_string())
        .env("PARLOR_STARTER")
        .num_args(1)
        .help("Preloads the message box with a prompt, ready to send.");
}

fn arg_github_user() -> Arg {
    return Arg::new(ConfigKey::GithubUser.to_string())
        .long(ConfigKey::GithubUser.to_string())
        .env("PARLOR_GITHUB_USER")
        .num_args(1)
        .help(format!(
            "GitHub user whose repositories fill the projects pane. [default: {}]",
            ConfigKey::GithubUser.default_value()
        ));
}

fn arg_feed_url() -> Arg {
    return Arg::new(ConfigKey::FeedUrl.to_string())
        .long(ConfigKey::FeedUrl.to_string())
        .env("PARLOR_FEED_URL")
        .num_args(1)
        .help(format!(
            "RSS feed powering the security news pane. [default: {}]",
            ConfigKey::FeedUrl.default_value()
        ));
}

fn arg_username() -> Arg {
    return Arg::new(ConfigKey::Username.to_string())
        .short('u')
        .long(ConfigKey::Username.to_string())
        .env("PARLOR_USERNAME")
        .num_args(1)
        .help(format!(
            "Name shown above your own chat turns. [default: {}]",
            ConfigKey::Username.default_value()
        ));
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:")
                || line.starts_with("HOTKEYS:")
                || line.starts_with("SUGGESTIONS:")
            {
                return Paint::new(format!("CHAT {line}"))
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("parlor")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .arg(arg_model())
        .arg(arg_gemini_token())
        .arg(arg_no_remember())
        .arg(arg_starter())
        .arg(arg_github_user())
        .arg(arg_feed_url())
        .arg(arg_username());
}

async fn load_config(matches: &ArgMatches) -> Result<()> {
    for key in [
        ConfigKey::Model,
        ConfigKey::Starter,
        ConfigKey::GithubUser,
        ConfigKey::FeedUrl,
        ConfigKey::Username,
    ] {
        if let Some(value) = matches.get_one::<String>(&key.to_string()) {
            Config::set(key, value);
        }
    }

    let remember = !matches.get_flag("no-remember");
    Config::set(ConfigKey::RememberCredential, &remember.to_string());

    // A key passed on the command line wins over the remembered one. Neither
    // is written back here, persistence is handled by /key and /remember.
    let credential = match matches.get_one::<String>(&ConfigKey::GeminiToken.to_string()) {
        Some(value) => value.to_string(),
        None => CredentialStore::default().load().await.unwrap_or_default(),
    };
    Config::set(ConfigKey::GeminiToken, &credential);

    return Ok(());
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    if let Some(("completions", subcmd_matches)) = matches.subcommand() {
        if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
            let mut app = build();
            print_completions(completions, &mut app);
        }

        return Ok(false);
    }

    load_config(&matches).await?;

    return Ok(true);
}
