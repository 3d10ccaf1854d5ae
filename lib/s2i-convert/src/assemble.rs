use devfile::{Command, Component, Devfile, Metadata, SCHEMA_VERSION_200};
use localconfig::ComponentConfig;

use crate::METADATA_VERSION;

pub fn assemble<C: ComponentConfig + ?Sized>(
    commands: impl IntoIterator<Item = Command>,
    components: Vec<Component>,
    config: &C,
) -> Devfile {
    let mut devfile = Devfile::new(SCHEMA_VERSION_200);
    devfile.metadata = Metadata {
        name: Some(config.name().to_string()),
        version: Some(METADATA_VERSION.to_string()),
    };
    devfile.commands = commands.into_iter().collect();
    devfile.components = components;
    devfile
}

#[cfg(test)]
mod tests {
    use localconfig::ComponentConfig;

    use crate::test_support::{config, resolved_image};
    use crate::{assemble, build_commands, build_components};

    #[test]
    fn should_set_schema_version_and_metadata() {
        let config = config();
        let components = build_components(&resolved_image(), &config, config.env_vars()).unwrap();

        let devfile = assemble(build_commands(), components, &config);

        assert_eq!("2.0.0", devfile.schema_version);
        assert_eq!(Some("nodejs-app"), devfile.metadata.name.as_deref());
        assert_eq!(Some("1.0.0"), devfile.metadata.version.as_deref());
        assert_eq!(2, devfile.commands.len());
        assert_eq!(3, devfile.components.len());
        assert!(devfile.validate().is_ok());
    }
}
