use devfile::{Command, CommandGroup, CommandGroupKind, ExecCommand};
use tracing::debug;

use crate::CONTAINER_NAME;

pub const BUILD_COMMAND_ID: &str = "s2i-assemble";

/// Prepares the S2I directories, runs the builder image's assemble script and restarts the
/// application.
pub const BUILD_COMMAND_LINE: &str =
    "/opt/odo/bin/s2i-setup && /opt/odo/bin/assemble-and-restart";

pub const RUN_COMMAND_ID: &str = "s2i-run";

pub const RUN_COMMAND_LINE: &str = "/opt/odo/bin/run";

/// The default build and the default run command, both executed in the builder container.
pub fn build_commands() -> [Command; 2] {
    debug!("Set devfile commands from s2i data");

    [
        exec_command(BUILD_COMMAND_ID, BUILD_COMMAND_LINE, CommandGroupKind::Build),
        exec_command(RUN_COMMAND_ID, RUN_COMMAND_LINE, CommandGroupKind::Run),
    ]
}

fn exec_command(id: &str, command_line: &str, kind: CommandGroupKind) -> Command {
    Command {
        id: id.to_string(),
        exec: ExecCommand {
            component: CONTAINER_NAME.to_string(),
            command_line: command_line.to_string(),
            group: Some(CommandGroup {
                kind,
                is_default: true,
            }),
        },
    }
}
