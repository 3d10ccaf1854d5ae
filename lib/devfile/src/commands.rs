use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Command {
    pub id: String,

    pub exec: ExecCommand,
}

/// A command line executed inside a container component.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecCommand {
    pub component: String,

    pub command_line: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<CommandGroup>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandGroup {
    pub kind: CommandGroupKind,

    #[serde(default)]
    pub is_default: bool,
}

#[remain::sorted]
#[derive(
    Clone, Copy, Debug, Deserialize, Display, EnumString, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CommandGroupKind {
    Build,
    Debug,
    Run,
    Test,
}
