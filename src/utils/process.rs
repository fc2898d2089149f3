use log::{debug, warn};
use std::env;
use std::path::Path;
use std::process::Command;

pub const INTERPRETER_ENV: &str = "PY_SUMMARIZER_PYTHON";
pub const DEFAULT_INTERPRETER: &str = "python";

pub fn default_interpreter() -> String {
    env::var(INTERPRETER_ENV).unwrap_or_else(|_| DEFAULT_INTERPRETER.to_string())
}

/// Runs `interpreter file_path` and returns its stdout on success, its stderr
/// otherwise. Spawn failures are reported in the returned text.
pub fn run_script(file_path: &Path, interpreter: &str) -> String {
    debug!("Running {:?} with {}", file_path, interpreter);

    match Command::new(interpreter).arg(file_path).output() {
        Ok(output) => {
            if output.status.success() {
                String::from_utf8_lossy(&output.stdout).into_owned()
            } else {
                debug!("Script exited with {:?}", output.status.code());
                String::from_utf8_lossy(&output.stderr).into_owned()
            }
        }
        Err(e) => {
            warn!("Failed to execute {}: {}", interpreter, e);
            format!("Error executing the code: {}", e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_interpreter() {
        let output = run_script(Path::new("script.py"), "definitely-not-an-interpreter-1234");
        assert!(output.starts_with("Error executing the code: "));
    }

    #[cfg(unix)]
    #[test]
    fn test_stdout_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("ok.sh");
        fs::write(&script, "echo hello\necho ignored 1>&2\n").unwrap();
        assert_eq!(run_script(&script, "sh"), "hello\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_stderr_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fail.sh");
        fs::write(&script, "echo partial\necho boom 1>&2\nexit 3\n").unwrap();
        assert_eq!(run_script(&script, "sh"), "boom\n");
    }
}
