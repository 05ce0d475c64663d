use tether_ioc::{Container, Injectable, Scope};
use std::sync::Arc;

trait MessageSender: Send + Sync {
  fn send(&self, to: &str, message: &str) -> String;
}

struct EmailSender;
impl MessageSender for EmailSender {
  fn send(&self, to: &str, message: &str) -> String {
    format!("Sending email to {}: '{}'", to, message)
  }
}
impl Injectable for EmailSender {
  type Deps = ();
  fn construct(_: ()) -> Self {
    EmailSender
  }
}

struct SmsSender;
impl MessageSender for SmsSender {
  fn send(&self, to: &str, message: &str) -> String {
    format!("Sending SMS to {}: '{}'", to, message)
  }
}
impl Injectable for SmsSender {
  type Deps = ();
  fn construct(_: ()) -> Self {
    SmsSender
  }
}

struct Newsletter(Arc<dyn MessageSender>);
impl Injectable for Newsletter {
  type Deps = (Arc<dyn MessageSender>,);
  fn construct((sender,): Self::Deps) -> Self {
    Newsletter(sender)
  }
}

struct TwoFactor(Arc<dyn MessageSender>);
impl Injectable for TwoFactor {
  type Deps = (Arc<dyn MessageSender>,);
  fn construct((sender,): Self::Deps) -> Self {
    TwoFactor(sender)
  }
}

fn main() {
  let container = Container::new();
  container.autowire::<Newsletter>();
  container.autowire::<TwoFactor>();

  // Everyone gets email, except two-factor codes which go out by SMS.
  container.bind_to::<dyn MessageSender, EmailSender>(Scope::Singleton, |s| s as Arc<dyn MessageSender>);
  container
    .when::<TwoFactor>()
    .needs::<dyn MessageSender>()
    .give_to::<SmsSender>(Scope::Singleton, |s| s as Arc<dyn MessageSender>);

  let newsletter = container.get::<Newsletter>(None).expect("newsletter");
  let two_factor = container.get::<TwoFactor>(None).expect("two factor");

  let result1 = newsletter.0.send("test@example.com", "Hello from Tether!");
  let result2 = two_factor.0.send("+123456789", "Your code is 0000");

  println!("{}", result1);
  println!("{}", result2);

  assert!(result1.contains("email"));
  assert!(result2.contains("SMS"));
}
