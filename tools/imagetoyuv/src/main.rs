use std::path::PathBuf;

use anyhow::Context;
use clap::{error::ErrorKind, Parser};
use tracing_subscriber::prelude::*;
use yuyv_fixture::{OddWidthPolicy, Options};

/// 画像をYUYV 4:2:2のRAWデータ(.yuyv)とC配列(.c)に変換する
#[derive(Debug, Clone, clap::Parser)]
#[command(version, about)]
struct Opt {
    /// 入力画像
    pub input: PathBuf,

    /// 幅が奇数の画像の扱い
    #[arg(long, default_value = "reject")]
    pub odd_width: OddWidth,

    /// 出力先ディレクトリ。省略時は入力画像と同じ場所
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// 確認用にYUYVをRGBに戻したPNGも出力する
    #[arg(long)]
    pub preview: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
#[clap(rename_all = "snake_case")]
enum OddWidth {
    Reject,
    Pad,
}

impl From<OddWidth> for OddWidthPolicy {
    fn from(value: OddWidth) -> Self {
        match value {
            OddWidth::Reject => OddWidthPolicy::Reject,
            OddWidth::Pad => OddWidthPolicy::Pad,
        }
    }
}

// 引数の誤りは標準出力に使い方を出して終了コード1
fn parse_args() -> Opt {
    match Opt::try_parse() {
        Ok(opt) => opt,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            print!("{}", e.render());
            std::process::exit(1);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let Opt {
        input,
        odd_width,
        out_dir,
        preview,
    } = parse_args();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let opts = Options {
        odd_width: odd_width.into(),
        out_dir,
        preview,
    };
    let report = yuyv_fixture::convert_file(&input, &opts)
        .with_context(|| format!("failed to convert {}", input.display()))?;
    tracing::debug!("{:?}", report);

    println!("C file saved to {}", report.c_source.display());
    Ok(())
}
