mod activities;
mod healthcheck;
mod helpers;
mod signup;
mod site;
mod unregister;

pub use activities::*;
pub use healthcheck::*;
pub use signup::*;
pub use site::*;
pub use unregister::*;
