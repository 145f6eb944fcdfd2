//! Shared helpers for vimcheat integration tests.

use assert_cmd::Command;

/// A `vimcheat` command with plain output and no host environment leaking in.
pub fn vimcheat_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("vimcheat");

    // Plain output unless a test passes --color explicitly
    cmd.env("VIMCHEAT_COLOR", "never");

    cmd.env_remove("VIMCHEAT_LOG").env_remove("NO_COLOR");

    cmd
}
