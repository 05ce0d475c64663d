use std::process::ExitCode;
use tether_app::{bootstrap, config::AppConfig, telemetry, Request, Router};

fn run() -> tether_app::Result<bool> {
  let config = AppConfig::discover()?;
  telemetry::init(&config.logging)?;

  let router = Router::new(bootstrap(&config.bindings));

  let requested: Vec<String> = std::env::args().skip(1).collect();
  let paths: Vec<String> = if requested.is_empty() {
    router.paths().into_iter().map(str::to_string).collect()
  } else {
    requested
  };

  let mut all_ok = true;
  for path in paths {
    let response = router.dispatch(&Request::get(path.as_str()));
    all_ok &= response.status == 200;
    println!("{} {} {}", response.status, path, response.body);
  }
  Ok(all_ok)
}

fn main() -> ExitCode {
  match run() {
    Ok(true) => ExitCode::SUCCESS,
    Ok(false) => ExitCode::from(1),
    Err(e) => {
      eprintln!("tether: {e}");
      ExitCode::from(2)
    }
  }
}
