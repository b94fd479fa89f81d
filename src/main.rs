mod report;

use requery::parse_request;
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let descriptor = match parse_request(&config.input) {
        Ok(descriptor) => descriptor,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    if config.json {
        match serde_json::to_string_pretty(&descriptor) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    } else {
        report::print_descriptor(&config.input, &descriptor, config.color);
    }
}

struct CliConfig {
    input: String,
    json: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("requery {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--json" => json = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
            other if other.starts_with('-') => {
                return Err(format!("error: unknown flag `{other}` (try --help)"));
            }
            other => {
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(other.to_string());
            }
        }
    }

    let input = match input {
        Some(input) => input,
        None => {
            if io::stdin().is_terminal() {
                return Err("error: no input given (pass a URL or pipe one on stdin; see --help)".to_string());
            }
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(|err| format!("error: failed to read stdin: {err}"))?;
            buf.trim().to_string()
        }
    };

    if input.is_empty() {
        return Err("error: empty input".to_string());
    }

    Ok(CliConfig { input, json, color })
}

fn print_help() {
    println!(
        "requery {} -- parse a JSON:API-style request URL into a request descriptor

USAGE:
    requery [OPTIONS] [URL]
    echo '/article/5?include=user' | requery

OPTIONS:
    -i, --input <URL>   Request path plus optional ?query
        --json          Print the descriptor as pretty JSON
        --color         Force ANSI colors on
        --no-color      Force ANSI colors off
    -h, --help          Show this help
    -V, --version       Show the version",
        env!("CARGO_PKG_VERSION")
    );
}
