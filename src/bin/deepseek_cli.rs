//! DeepSeek CLI — command-line interface for DeepSeek via Ollama
//!
//! Usage:
//!   deepseek-cli "Write a Rust function to sort a list"
//!   deepseek-cli --interactive
//!   deepseek-cli --code "merge sort in Rust"
//!   deepseek-cli --review myfile.rs
//!   deepseek-cli --explain myfile.rs

use futures::TryStreamExt;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use openhands_client::{ChatMessage, OllamaClient};

const DEFAULT_MODEL: &str = "deepseek-coder-v2:16b";

#[derive(Default)]
struct CliArgs {
    prompt: Option<String>,
    interactive: bool,
    code: Option<String>,
    review: Option<String>,
    explain: Option<String>,
    fix: Option<String>,
    error: Option<String>,
    model: Option<String>,
    list: bool,
    no_stream: bool,
}

fn print_usage() {
    println!(
        r#"deepseek-cli — AI coding assistant

USAGE:
    deepseek-cli [PROMPT] [OPTIONS]

OPTIONS:
    -i, --interactive       Interactive chat mode
    -c, --code <TASK>       Generate code for a task
    -r, --review <FILE>     Review code in a file
    -e, --explain <FILE>    Explain code in a file
    -f, --fix <FILE>        Fix code in a file
        --error <MSG>       Error message (for --fix)
    -m, --model <NAME>      Model to use (default: {DEFAULT_MODEL})
    -l, --list              List available models
        --no-stream         Disable streaming output
    -h, --help              Show this help message

EXAMPLES:
    deepseek-cli "Write a Rust quicksort function"
    deepseek-cli --interactive
    deepseek-cli --code "REST API with axum"
    deepseek-cli --review myfile.rs
    deepseek-cli --fix myfile.rs --error "index out of bounds""#
    );
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();
    let mut i = 0;

    let mut take_value = |i: &mut usize, flag: &str| -> Result<String, String> {
        *i += 1;
        args.get(*i)
            .cloned()
            .ok_or_else(|| format!("Missing value for {flag}"))
    };

    while i < args.len() {
        match args[i].as_str() {
            "-i" | "--interactive" => cli.interactive = true,
            "-c" | "--code" => cli.code = Some(take_value(&mut i, "--code")?),
            "-r" | "--review" => cli.review = Some(take_value(&mut i, "--review")?),
            "-e" | "--explain" => cli.explain = Some(take_value(&mut i, "--explain")?),
            "-f" | "--fix" => cli.fix = Some(take_value(&mut i, "--fix")?),
            "--error" => cli.error = Some(take_value(&mut i, "--error")?),
            "-m" | "--model" => cli.model = Some(take_value(&mut i, "--model")?),
            "-l" | "--list" => cli.list = true,
            "--no-stream" => cli.no_stream = true,
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {other}"));
            }
            other => {
                if cli.prompt.is_some() {
                    return Err(format!("Unexpected argument: {other}"));
                }
                cli.prompt = Some(other.to_string());
            }
        }
        i += 1;
    }

    Ok(cli)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let model = cli.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let client = match OllamaClient::local(&model) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let result = run(&client, &cli).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(client: &OllamaClient, cli: &CliArgs) -> openhands_client::Result<()> {
    if cli.list {
        return list_models(client).await;
    }

    if cli.interactive {
        return interactive_mode(client).await;
    }

    if let Some(task) = &cli.code {
        stream_prompt(client, &code_prompt(task)).await?;
        return Ok(());
    }

    if let Some(path) = &cli.review {
        if let Some(source) = read_source(path) {
            stream_prompt(client, &review_prompt(&source)).await?;
        }
        return Ok(());
    }

    if let Some(path) = &cli.explain {
        if let Some(source) = read_source(path) {
            stream_prompt(client, &explain_prompt(&source)).await?;
        }
        return Ok(());
    }

    if let Some(path) = &cli.fix {
        if let Some(source) = read_source(path) {
            stream_prompt(client, &fix_prompt(&source, cli.error.as_deref())).await?;
        }
        return Ok(());
    }

    if let Some(prompt) = &cli.prompt {
        if cli.no_stream {
            let response = client.chat(&[ChatMessage::user(prompt)]).await?;
            println!("\n🤖 DeepSeek ({}):\n\n{response}", client.model());
        } else {
            stream_prompt(client, prompt).await?;
        }
        return Ok(());
    }

    print_usage();
    Ok(())
}

/// Read a source file, logging and swallowing a missing file.
fn read_source(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(source) => Some(source),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            eprintln!("File not found: {path}");
            None
        }
        Err(e) => {
            eprintln!("Cannot read {path}: {e}");
            None
        }
    }
}

async fn stream_prompt(client: &OllamaClient, prompt: &str) -> openhands_client::Result<String> {
    stream_chat(client, &[ChatMessage::user(prompt)]).await
}

/// Stream a response to stdout, returning the full accumulated text.
async fn stream_chat(
    client: &OllamaClient,
    messages: &[ChatMessage],
) -> openhands_client::Result<String> {
    println!("\n🤖 DeepSeek ({}):\n", client.model());

    let mut full_response = String::new();
    let mut stream = client.chat_stream(messages).await?;
    while let Some(delta) = stream.try_next().await? {
        full_response.push_str(&delta);
        print!("{delta}");
        let _ = std::io::stdout().flush();
    }
    println!("\n");

    Ok(full_response)
}

fn code_prompt(task: &str) -> String {
    format!(
        "You are an expert programmer. Generate clean, production-ready code.\n\
         \n\
         Task: {task}\n\
         \n\
         Requirements:\n\
         - Write only the code\n\
         - Include error handling\n\
         - Add documentation\n\
         - Follow best practices\n\
         \n\
         Code:"
    )
}

fn review_prompt(source: &str) -> String {
    format!(
        "Review this code and provide detailed feedback:\n\
         \n\
         ```\n{source}\n```\n\
         \n\
         Check for:\n\
         1. Bugs and errors\n\
         2. Security vulnerabilities\n\
         3. Performance issues\n\
         4. Code style and best practices\n\
         5. Suggestions for improvement\n\
         \n\
         Be specific and provide examples."
    )
}

fn explain_prompt(source: &str) -> String {
    format!(
        "Explain this code in detail:\n\
         \n\
         ```\n{source}\n```\n\
         \n\
         Provide:\n\
         1. Overview of what the code does\n\
         2. Step-by-step explanation\n\
         3. Key concepts used\n\
         4. Potential improvements"
    )
}

fn fix_prompt(source: &str, error: Option<&str>) -> String {
    let error_info = error.map(|e| format!("\nError: {e}")).unwrap_or_default();
    format!(
        "Fix this code:{error_info}\n\
         \n\
         ```\n{source}\n```\n\
         \n\
         Provide the corrected code with comments explaining the fixes."
    )
}

async fn interactive_mode(client: &OllamaClient) -> openhands_client::Result<()> {
    println!("🧠 DeepSeek Interactive Mode");
    println!("Model: {}", client.model());
    println!("Commands: /code, /review <file>, /explain <file>, /fix <file>, /quit");

    let mut history: Vec<ChatMessage> = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("\nYou: ");
        let _ = std::io::stdout().flush();

        let line = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("\nUse /quit to exit");
                continue;
            }
            line = lines.next_line() => match line {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    eprintln!("Error: {e}");
                    break;
                }
            },
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(command) = input.strip_prefix('/') {
            let (cmd, arg) = match command.split_once(char::is_whitespace) {
                Some((cmd, arg)) => (cmd, arg.trim()),
                None => (command, ""),
            };
            match cmd.to_lowercase().as_str() {
                "quit" | "exit" | "q" => {
                    println!("Goodbye!");
                    break;
                }
                "code" => run_command_prompt(client, arg, "Usage: /code <task description>", code_prompt).await,
                "review" => run_file_prompt(client, arg, "Usage: /review <filepath>", review_prompt).await,
                "explain" => run_file_prompt(client, arg, "Usage: /explain <filepath>", explain_prompt).await,
                "fix" => {
                    run_file_prompt(client, arg, "Usage: /fix <filepath>", |source| {
                        fix_prompt(source, None)
                    })
                    .await
                }
                "clear" => {
                    history.clear();
                    println!("History cleared");
                }
                "help" => print_interactive_help(),
                other => println!("Unknown command: /{other}"),
            }
            continue;
        }

        // Regular chat turn with rolling history; a cancelled or failed turn
        // leaves the history as it was before the turn.
        history.push(ChatMessage::user(input));
        let turn = tokio::select! {
            _ = tokio::signal::ctrl_c() => None,
            turn = stream_chat(client, &history) => Some(turn),
        };
        match turn {
            None => {
                println!("\nUse /quit to exit");
                history.pop();
            }
            Some(Ok(full_response)) => history.push(ChatMessage::assistant(full_response)),
            Some(Err(e)) => {
                eprintln!("Error: {e}");
                history.pop();
            }
        }
    }

    Ok(())
}

async fn run_command_prompt(
    client: &OllamaClient,
    arg: &str,
    usage: &str,
    build: impl Fn(&str) -> String,
) {
    if arg.is_empty() {
        println!("{usage}");
        return;
    }
    if let Err(e) = stream_prompt(client, &build(arg)).await {
        eprintln!("Error: {e}");
    }
}

async fn run_file_prompt(
    client: &OllamaClient,
    arg: &str,
    usage: &str,
    build: impl Fn(&str) -> String,
) {
    if arg.is_empty() {
        println!("{usage}");
        return;
    }
    let Some(source) = read_source(arg) else {
        return;
    };
    if let Err(e) = stream_prompt(client, &build(&source)).await {
        eprintln!("Error: {e}");
    }
}

fn print_interactive_help() {
    println!(
        r#"
Available commands:
  /code <task>     - Generate code for a task
  /review <file>   - Review code in a file
  /explain <file>  - Explain code in a file
  /fix <file>      - Fix code in a file
  /clear           - Clear conversation history
  /quit            - Exit
"#
    );
}

async fn list_models(client: &OllamaClient) -> openhands_client::Result<()> {
    let models = client.list_models().await?;
    println!("\nAvailable Models:\n");
    for model in &models {
        let gib = model.size as f64 / (1024u64.pow(3) as f64);
        println!("  • {} ({gib:.1} GB)", model.name);
    }
    Ok(())
}
