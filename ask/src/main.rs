mod shell;

use anyhow::Result;
use clap::Parser;
use postfind_core::{FileSource, Retriever, RetrieverConfig, TextSource, Tokenizer, DEFAULT_THRESHOLD};
use shell::{render_outcome, ShellCommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "postfind")]
#[command(about = "Ask questions, get the best-matching paragraph of your posts file", long_about = None)]
struct Cli {
    /// Corpus file; defaults to posts.text, then posts.txt
    #[arg(long)]
    corpus: Option<PathBuf>,
    /// Minimum cosine score for an answer
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,
    /// Answer a single question and exit
    #[arg(long)]
    query: Option<String>,
}

fn main() -> Result<ExitCode> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let source = match &cli.corpus {
        Some(path) => FileSource::new(path),
        None => FileSource::default(),
    };
    let config = RetrieverConfig { threshold: cli.threshold };
    tracing::info!(source = %source.describe(), threshold = config.threshold, "loading corpus");
    let retriever = match Retriever::from_source(&source, Tokenizer::new(), config) {
        Ok(r) => r,
        Err(e) => {
            println!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Some(q) = cli.query {
        print!("{}", render_outcome(&retriever.ask(&q)));
        return Ok(ExitCode::SUCCESS);
    }

    println!("Loaded {} document(s). Ask me anything (type 'exit' to quit).", retriever.stats().num_docs);
    run_loop(&retriever, io::stdin().lock(), io::stdout().lock())?;
    Ok(ExitCode::SUCCESS)
}

fn run_loop(retriever: &Retriever, mut input: impl BufRead, mut out: impl Write) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "What do you want to know? ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        match ShellCommand::parse(&line) {
            ShellCommand::Skip => continue,
            ShellCommand::Quit => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            ShellCommand::Ask(q) => write!(out, "{}", render_outcome(&retriever.ask(q)))?,
        }
    }
    Ok(())
}
