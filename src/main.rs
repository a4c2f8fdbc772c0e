//! 命令行入口
//!
//! 读取本地文件或远程URL，执行一次翻译替换，输出改写后的页面。

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use pagetrans::core::{print_error_message, translate_page_sync, PageTransOptions};

#[derive(Parser)]
#[command(
    name = "pagetrans",
    version,
    about = "Translate the visible text of a static web page in place"
)]
struct Cli {
    /// 要翻译的页面：本地HTML文件路径或 http(s) URL
    target: String,

    /// 目标语言代码
    #[arg(short = 'l', long = "lang", default_value = "nl")]
    lang: String,

    /// 输出文件；缺省写到标准输出
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// 自定义翻译端点
    #[arg(long = "endpoint")]
    endpoint: Option<String>,

    /// 输出编码（如 utf-8、windows-1252）
    #[arg(short = 'e', long = "encoding")]
    encoding: Option<String>,

    /// 不打印进度信息
    #[arg(short = 's', long = "silent")]
    silent: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.silent {
            tracing::Level::ERROR
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .init();

    let options = PageTransOptions {
        target_language: cli.lang,
        endpoint: cli.endpoint,
        encoding: cli.encoding,
        silent: cli.silent,
    };

    match translate_page_sync(&options, &cli.target) {
        Ok((document, _title)) => {
            if let Some(output_path) = cli.output {
                if let Err(e) = fs::write(&output_path, &document) {
                    print_error_message(&format!(
                        "Failed to write {}: {e}",
                        output_path.display()
                    ));
                    process::exit(1);
                }
            } else if let Err(e) = io::stdout().write_all(&document) {
                print_error_message(&format!("Failed to write output: {e}"));
                process::exit(1);
            }
        }
        Err(e) => {
            print_error_message(&format!("Error: {e}"));
            process::exit(1);
        }
    }
}
