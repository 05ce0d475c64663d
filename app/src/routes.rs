//! A tiny in-process router standing in for an HTTP front end.
//!
//! Every handler builds its controller through the container on each request,
//! so the bindings decide what the handler actually talks to.

use crate::controllers::{Foo1, Foobarzip, MagicNumber};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tether_ioc::{Arguments, Container};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
  Get,
  Post,
}

impl fmt::Display for Method {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Method::Get => write!(f, "GET"),
      Method::Post => write!(f, "POST"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
  pub method: Method,
  pub path: String,
}

impl Request {
  pub fn new(method: Method, path: impl Into<String>) -> Self {
    Self {
      method,
      path: path.into(),
    }
  }

  pub fn get(path: impl Into<String>) -> Self {
    Self::new(Method::Get, path)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
  pub status: u16,
  pub body: String,
}

impl Response {
  pub fn ok(body: impl Into<String>) -> Self {
    Self {
      status: 200,
      body: body.into(),
    }
  }

  fn error(status: u16, err: &Error) -> Self {
    Self {
      status,
      body: err.to_string(),
    }
  }
}

type Handler = Box<dyn Fn(&Container, &Request) -> tether_ioc::Result<String> + Send + Sync>;

pub struct Router {
  container: Arc<Container>,
  routes: HashMap<String, HashMap<Method, Handler>>,
}

impl Router {
  /// A router with every application route registered.
  pub fn new(container: Arc<Container>) -> Self {
    let mut router = Self {
      container,
      routes: HashMap::new(),
    };

    router
      .get("/", |_, _| Ok("tether".to_string()))
      .get("/foo", |c, _| Ok(c.get::<Foobarzip>(None)?.index()))
      .get("/foo2", |c, _| Ok(c.get::<Foobarzip>(None)?.index2()))
      .get("/magic", |c, _| Ok(c.get::<MagicNumber>(None)?.index().to_string()))
      .get("/foo1", |c, _| Ok(c.get::<Foo1>(None)?.index()))
      .get("/zip", |c, request| {
        c.invoke(&Arguments::new().with(request.clone()), Foobarzip::index3)
      });

    router
  }

  fn get<F>(&mut self, path: &str, handler: F) -> &mut Self
  where
    F: Fn(&Container, &Request) -> tether_ioc::Result<String> + Send + Sync + 'static,
  {
    self
      .routes
      .entry(path.to_string())
      .or_default()
      .insert(Method::Get, Box::new(handler));
    self
  }

  /// Registered paths, sorted.
  pub fn paths(&self) -> Vec<&str> {
    let mut paths: Vec<&str> = self.routes.keys().map(String::as_str).collect();
    paths.sort_unstable();
    paths
  }

  /// Runs the matching handler and returns its body.
  pub fn handle(&self, request: &Request) -> Result<String> {
    let methods = self.routes.get(&request.path).ok_or_else(|| Error::RouteNotFound {
      method: request.method.to_string(),
      path: request.path.clone(),
    })?;
    let handler = methods
      .get(&request.method)
      .ok_or_else(|| Error::MethodNotAllowed {
        method: request.method.to_string(),
        path: request.path.clone(),
      })?;
    Ok(handler(self.container.as_ref(), request)?)
  }

  /// Like [`handle`](Self::handle), with failures turned into error responses.
  pub fn dispatch(&self, request: &Request) -> Response {
    let span = tracing::info_span!("request", method = %request.method, path = %request.path);
    let _enter = span.enter();

    match self.handle(request) {
      Ok(body) => {
        tracing::info!(status = 200, "request handled");
        Response::ok(body)
      }
      Err(e @ Error::RouteNotFound { .. }) => {
        tracing::warn!(status = 404, "no matching route");
        Response::error(404, &e)
      }
      Err(e @ Error::MethodNotAllowed { .. }) => {
        tracing::warn!(status = 405, "method not allowed");
        Response::error(405, &e)
      }
      Err(e) => {
        tracing::error!(status = 500, error = %e, "handler failed");
        Response::error(500, &e)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn method_display() {
    assert_eq!(Method::Get.to_string(), "GET");
    assert_eq!(Method::Post.to_string(), "POST");
  }

  #[test]
  fn empty_container_yields_server_errors() {
    let router = Router::new(Arc::new(Container::new()));

    assert_eq!(router.dispatch(&Request::get("/")).status, 200);
    let response = router.dispatch(&Request::get("/foo"));
    assert_eq!(response.status, 500);
    assert!(response.body.contains("no provider is bound"));
  }
}
