use clap::ValueEnum;
use group_fold_domain::{Field, SelectStrategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
    Yaml,
    Md,
}

/// 選択の評価方法
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum Strategy {
    /// filter → map の2パス
    #[default]
    Chained,
    /// 1回の畳み込み (reduce)
    Folded,
}

/// 選択結果として出力するフィールド
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "kebab-case")]
pub enum FieldArg {
    #[default]
    FirstName,
    LastName,
    FullName,
}

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(Strategy, SelectStrategy, Chained, Folded);
map_enum!(FieldArg, Field, FirstName, LastName, FullName);
