use std::process::ExitCode;

fn main() -> ExitCode {
  match almanac_core::run(
    std::env::args_os().collect()
  ) {
    | Ok(()) => ExitCode::SUCCESS,
    | Err(err) => {
      eprintln!("almanac: {err:#}");
      ExitCode::FAILURE
    }
  }
}
