use crate::{Options, format_to_string, format_to_string_with_log};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE          Write output to FILE (default stdout)\n\
               --in-place             Overwrite INPUT file with the result\n\
               --log                  Print the repair log to stderr as JSON lines\n\
               --ensure-ascii         Escape non-ASCII as \\uXXXX\n\
               --context BYTES        Log context window in bytes (default 10)\n\
               --no-python-keywords   Disable True/False/None normalization\n\
               --no-undefined-null    Disable undefined -> null repair\n\
               --no-nonfinite-null    Disable NaN/Infinity -> null normalization\n\
               --no-constructor-calls Disable constructor call unwrapping\n\
               --no-comments          Disable comment stripping\n\
               --no-collapse          Disable the collapsed-escapes pass\n\
               --no-fragments         Disable embedded fragment repair\n\
           -h, --help                 Show this help\n",
        prog = program
    );
}

fn parse_args() -> (Options, CliMode) {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "jsontidy".to_string());
    args.remove(0);

    let mut opts = Options::default();
    let mut input: Option<String> = None;
    let mut output: Option<String> = None;
    let mut in_place = false;
    let mut log = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                output = Some(args[i].clone());
            }
            "--in-place" => {
                in_place = true;
            }
            "--log" => {
                log = true;
            }
            "--ensure-ascii" => {
                opts.ensure_ascii = true;
            }
            "--context" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing BYTES for --context");
                    std::process::exit(2);
                }
                opts.log_context_window = args[i].parse().unwrap_or(10);
            }
            "--no-python-keywords" => {
                opts.allow_python_keywords = false;
            }
            "--no-undefined-null" => {
                opts.repair_undefined = false;
            }
            "--no-nonfinite-null" => {
                opts.normalize_nonfinite = false;
            }
            "--no-constructor-calls" => {
                opts.unwrap_constructor_calls = false;
            }
            "--no-comments" => {
                opts.strip_comments = false;
            }
            "--no-collapse" => {
                opts.collapse_escaped_input = false;
            }
            "--no-fragments" => {
                opts.repair_fragments = false;
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                input = Some(path.to_string());
            }
        }
        i += 1;
    }

    let mode = CliMode {
        input,
        output,
        in_place,
        log,
    };
    (opts, mode)
}

struct CliMode {
    input: Option<String>,
    output: Option<String>,
    in_place: bool,
    log: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (opts, mode) = parse_args();

    let content = match &mode.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let (out, entries) = if mode.log {
        format_to_string_with_log(&content, &opts)?
    } else {
        (format_to_string(&content, &opts)?, Vec::new())
    };

    for entry in &entries {
        eprintln!("{}", serde_json::to_string(entry)?);
    }

    if mode.in_place {
        let path = mode
            .input
            .as_ref()
            .ok_or("--in-place requires INPUT file")?;
        fs::write(path, out)?;
        return Ok(());
    }

    let mut writer: Box<dyn Write> = if let Some(ref o) = mode.output {
        Box::new(BufWriter::new(File::create(o)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };
    writer.write_all(out.as_bytes())?;
    writer.flush()?;
    Ok(())
}
