use anyhow::Result;
use clap::{CommandFactory, FromArgMatches};

use deepl_cli::cli::commands::{configure, glossary, languages, translate, usage};
use deepl_cli::cli::{Args, Command, exit_code};
use deepl_cli::logging;
use deepl_cli::ui::Style;
use deepl_cli::version::BuildInfo;

#[tokio::main]
async fn main() {
    let build_info = BuildInfo::current();
    let matches = Args::command()
        .long_version(build_info.to_string())
        .get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    logging::init(args.global.debug);

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

async fn run(args: Args) -> Result<()> {
    let global = &args.global;

    match &args.command {
        Some(Command::Translate(translate_args)) => {
            translate::run_translate(global, translate_args).await?;
        }
        Some(Command::Usage) => {
            usage::run_usage(global).await?;
        }
        Some(Command::Languages { language_type }) => {
            languages::run_languages(global, *language_type).await?;
        }
        Some(Command::GlossaryLanguagePairs) => {
            glossary::run_glossary_language_pairs(global).await?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(*show)?;
        }
        None => {
            translate::run_translate(global, &args.translate).await?;
        }
    }

    Ok(())
}
