use tether_ioc::{global, resolve, Injectable, Scope};
use std::sync::Arc;

// 1. The abstraction
trait Logger: Send + Sync {
  fn log(&self, message: &str);
}

// 2. A concrete implementation
struct ConsoleLogger;
impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}
impl Injectable for ConsoleLogger {
  type Deps = ();
  fn construct(_: ()) -> Self {
    ConsoleLogger
  }
}

// 3. A service that depends on the abstraction. It declares the dependency;
// the container decides which implementation it gets.
struct ReportService {
  logger: Arc<dyn Logger>,
}

impl ReportService {
  fn generate_report(&self) {
    self.logger.log("Starting report generation.");
    self.logger.log("Finished report generation.");
  }
}

impl Injectable for ReportService {
  type Deps = (Arc<dyn Logger>,);
  fn construct((logger,): Self::Deps) -> Self {
    ReportService { logger }
  }
}

fn main() {
  global().bind_to::<dyn Logger, ConsoleLogger>(Scope::Singleton, |l| l as Arc<dyn Logger>);
  global().autowire::<ReportService>();

  println!("Resolving the high-level service...");
  let report_service = resolve!(ReportService);

  println!("Using the service...");
  report_service.generate_report();
}
