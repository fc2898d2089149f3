use log::{error, info, warn};
use py_summarizer::utils::{default_interpreter, run_script};
use py_summarizer::{analyze_codebase, summarize_file, version};
use std::io;
use std::path::Path;
use std::time::Instant;

fn main() -> io::Result<()> {
    // Initialize logger
    if std::env::var_os("RUST_LOG").is_none() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    let raw_args: Vec<String> = std::env::args().collect();
    let run_requested = raw_args.iter().any(|a| a == "--run");
    let args: Vec<&String> = raw_args.iter().filter(|a| *a != "--run").collect();

    if args.len() < 2 {
        error!("Not enough arguments provided");
        eprintln!(
            "Usage: {} <file_or_directory> [output_path] [num_threads] [--run]",
            args.first().map(|s| s.as_str()).unwrap_or("py_summarizer")
        );
        eprintln!("Version: {}", version());
        return Ok(());
    }

    let target_path = Path::new(args[1].as_str());
    info!("Python Summarizer v{}", version());

    if !target_path.exists() {
        error!("Path does not exist: {:?}", target_path);
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("path does not exist: {}", target_path.display()),
        ));
    }

    if target_path.is_file() {
        return summarize_single_file(target_path, run_requested);
    }

    if run_requested {
        warn!("--run only applies to a single file; ignoring it for {:?}", target_path);
    }

    let output_path = if args.len() >= 3 {
        Path::new(args[2].as_str())
    } else {
        Path::new("code_summary.json")
    };

    let num_threads = if args.len() >= 4 {
        args[3].parse().unwrap_or_else(|_| {
            let cpu_count = num_cpus::get();
            warn!(
                "Invalid thread count provided, defaulting to {} CPUs",
                cpu_count
            );
            cpu_count
        })
    } else {
        let cpu_count = num_cpus::get();
        info!("Using default thread count: {}", cpu_count);
        cpu_count
    };

    info!("Processing directory at: {:?}", target_path);
    info!("Using {} threads", num_threads);
    info!("Parser: Tree-sitter");

    let start_time = Instant::now();
    analyze_codebase(target_path, output_path, num_threads).map_err(io::Error::other)?;

    let elapsed = start_time.elapsed();
    info!("Summarization completed in {:.2?}", elapsed);
    info!("Output saved to: {:?}", output_path);

    Ok(())
}

fn summarize_single_file(file_path: &Path, run_requested: bool) -> io::Result<()> {
    info!("Processing file at: {:?}", file_path);

    if run_requested {
        let interpreter = default_interpreter();
        info!("Running script with {}", interpreter);
        println!("Output:\n{}\n", run_script(file_path, &interpreter));
    }

    match summarize_file(file_path) {
        Ok(result) => {
            println!("Code Summary:\n{}\n", result.summary);
            println!("Code Explanation:\n{}", result.explanation);
            Ok(())
        }
        Err(e) => {
            error!("Failed to summarize {:?}: {}", file_path, e);
            Err(io::Error::other(e))
        }
    }
}
