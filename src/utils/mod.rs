pub mod io;
pub mod process;

pub use io::export_report_to_json;
pub use process::{default_interpreter, run_script};
