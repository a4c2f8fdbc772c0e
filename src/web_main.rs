//! Web 服务器主程序入口

use pagetrans::core::PageTransOptions;
use pagetrans::web::{WebConfig, WebServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_target(false).init();

    // 环境变量打底，命令行参数覆盖
    let mut config = WebConfig::from_env();

    let args: Vec<String> = std::env::args().collect();

    // 简单的命令行参数解析
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" | "-b" => {
                if i + 1 < args.len() {
                    config.bind_addr = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("Error: --bind requires an address");
                    std::process::exit(1);
                }
            }
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    config.port = args[i + 1].parse().unwrap_or_else(|_| {
                        eprintln!("Error: Invalid port number");
                        std::process::exit(1);
                    });
                    i += 2;
                } else {
                    eprintln!("Error: --port requires a port number");
                    std::process::exit(1);
                }
            }
            "--static-dir" => {
                if i + 1 < args.len() {
                    config.static_dir = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --static-dir requires a path");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Error: Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
    }

    // Web 模式下翻译流程静默运行
    let mut options = PageTransOptions::default();
    options.silent = true;

    let server = WebServer::new(config, options);
    server.start().await?;

    Ok(())
}

fn print_help() {
    println!("Pagetrans Web Server");
    println!();
    println!("USAGE:");
    println!("    pagetrans-web [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -b, --bind <ADDRESS>     Bind address [default: 127.0.0.1]");
    println!("    -p, --port <PORT>        Port number [default: 7080]");
    println!("        --static-dir <DIR>   Static site directory [default: static]");
    println!("    -h, --help               Print help information");
    println!();
    println!("EXAMPLES:");
    println!("    pagetrans-web");
    println!("    pagetrans-web --bind 0.0.0.0 --port 3000");
}
