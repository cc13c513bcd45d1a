use clap::builder::ArgAction;
use common::error::Error;

/// 解析済みのコマンドライン引数
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// 処理する数学の質問（-h のみ指定時は None）
    pub question: Option<String>,
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("mathq")
        .about("Process a complex mathematical question into a pseudo-algorithm")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("question")
                .index(1)
                .value_name("question")
                .help("A complex mathematical question to process")
                .num_args(0..=1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let help = matches.get_flag("help");
    let question = matches.get_one::<String>("question").cloned();
    Config { help, question }
}

/// コマンドラインを解析する
pub fn parse_args() -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}
