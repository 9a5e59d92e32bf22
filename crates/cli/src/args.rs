// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use group_fold_domain::ByKey;

use crate::{
    options::{FieldArg, OutputFormat, Strategy},
    parsers::parse_age,
};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "group_fold",
    version = crate::VERSION,
    about = "レコードをキーごとに畳み込んで集計するツール"
)]
pub struct Args {
    /// 入力ロスター (JSON 配列 / YAML シーケンス)。省略時は組み込みサンプル
    #[arg(long, short = 'i', value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub input: Option<PathBuf>,

    /// 集計キー (age, first-name, last-name) — カンマ区切り/複数指定可
    #[arg(long, value_delimiter = ',', default_value = "age", help_heading = "集計")]
    pub by: Vec<ByKey>,

    /// 選択する最小年齢 (この値を含む)
    #[arg(long, value_parser = parse_age, help_heading = "選択")]
    pub min_age: Option<u32>,

    /// 選択する年齢の上限 (この値未満)。年齢指定が一切ない場合は 30
    #[arg(long, value_parser = parse_age, conflicts_with = "all_ages", help_heading = "選択")]
    pub max_age: Option<u32>,

    /// 年齢の上限を外す
    #[arg(long, help_heading = "選択")]
    pub all_ages: bool,

    /// 選択結果に出力するフィールド
    #[arg(long, value_enum, default_value = "first-name", help_heading = "選択")]
    pub field: FieldArg,

    /// 選択の評価方法 (chained = filter+map, folded = reduce)
    #[arg(long, value_enum, default_value = "chained", help_heading = "選択")]
    pub strategy: Strategy,

    /// 両方の評価方法を実行し、結果が一致しなければ失敗する
    #[arg(long, help_heading = "選択")]
    pub verify: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// 結果をファイルへ書き出す (標準出力の代わり)
    #[arg(long, short = 'o', value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub output: Option<PathBuf>,

    /// ログ出力を詳細にする (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}
