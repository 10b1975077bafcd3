use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use dictgen_cli::{Config, config, run};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rime-dictgen", about = "把 CSV 词条表转成 Rime 拼音词典")]
struct Cli {
    /// 配置文件（TOML），只需写要改的键
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// 输入 CSV（覆盖配置）
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// 自定义读音表（TOML，覆盖配置）
    #[arg(long)]
    overrides: Option<PathBuf>,
    /// 输出目录：所有视图写到该目录下，文件名不变
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// 权重；为负时不输出权重列
    #[arg(long, allow_hyphen_values = true)]
    weight: Option<i64>,
    /// 简拼编码的最小长度
    #[arg(long)]
    min_abbrev_len: Option<usize>,
    /// 人名分隔符
    #[arg(long)]
    name_separator: Option<String>,
    /// 输出列分隔符
    #[arg(long)]
    field_separator: Option<String>,
    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
    /// 打印默认配置后退出
    #[arg(long)]
    export_config: bool,
    /// 打印内置自定义读音表后退出
    #[arg(long)]
    export_overrides: bool,
}

impl Cli {
    fn load_config(&self) -> Result<Config, config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::from_path(path)?,
            None => Config::default(),
        };
        if let Some(v) = &self.input {
            config.input = v.clone();
        }
        if let Some(v) = &self.overrides {
            config.overrides = Some(v.clone());
        }
        if let Some(dir) = &self.out_dir {
            config.output.relocate(dir);
        }
        if let Some(v) = self.weight {
            config.weight = v;
        }
        if let Some(v) = self.min_abbrev_len {
            config.min_abbrev_len = v;
        }
        if let Some(v) = &self.name_separator {
            config.name_separator = v.clone();
        }
        if let Some(v) = &self.field_separator {
            config.field_separator = v.clone();
        }
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.export_config {
        print!("{}", config::default_toml());
        return ExitCode::SUCCESS;
    }
    if cli.export_overrides {
        print!("{}", dictgen_pinyin::default_toml());
        return ExitCode::SUCCESS;
    }

    init_tracing(cli.verbose);
    let result = cli
        .load_config()
        .map_err(anyhow::Error::from)
        .and_then(|config| run(&config));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("错误：{e:#}");
            ExitCode::FAILURE
        }
    }
}
