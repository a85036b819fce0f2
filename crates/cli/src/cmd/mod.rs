mod build;
mod run;

pub use build::cmd_build;
pub use run::cmd_run;
