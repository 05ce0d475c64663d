//! The demo application: a handful of controllers and helpers wired together
//! by `tether_ioc`, served by an in-process router.
//!
//! ```
//! use tether_app::{bootstrap, config::BindingsConfig, Request, Router};
//!
//! let router = Router::new(bootstrap(&BindingsConfig::default()));
//! assert_eq!(router.dispatch(&Request::get("/foo")).body, "foobarzip");
//! ```

pub mod config;
pub mod controllers;
pub mod error;
pub mod provider;
pub mod repositories;
pub mod routes;
pub mod telemetry;

pub use error::{Error, Result};
pub use provider::{bootstrap, AppServiceProvider};
pub use routes::{Method, Request, Response, Router};
