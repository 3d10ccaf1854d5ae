use std::collections::HashSet;

use crate::{ComponentKind, Devfile, DevfileError, DevfileResult};

pub(crate) fn validate(devfile: &Devfile) -> DevfileResult<()> {
    let mut component_names = HashSet::new();
    let mut containers = HashSet::new();
    let mut volumes = HashSet::new();
    for component in &devfile.components {
        if !component_names.insert(component.name.as_str()) {
            return Err(DevfileError::DuplicateComponentName(component.name.clone()));
        }

        match component.kind {
            ComponentKind::Container(_) => containers.insert(component.name.as_str()),
            ComponentKind::Volume(_) => volumes.insert(component.name.as_str()),
        };
    }

    for component in &devfile.components {
        if let Some(container) = component.as_container() {
            for mount in &container.volume_mounts {
                if !volumes.contains(mount.name.as_str()) {
                    return Err(DevfileError::UnknownVolume {
                        component: component.name.clone(),
                        volume: mount.name.clone(),
                    });
                }
            }
        }
    }

    let mut ids = HashSet::new();
    let mut defaults = HashSet::new();
    for command in &devfile.commands {
        if !ids.insert(command.id.as_str()) {
            return Err(DevfileError::DuplicateCommandId(command.id.clone()));
        }

        if !containers.contains(command.exec.component.as_str()) {
            return Err(DevfileError::UnknownCommandComponent {
                command: command.id.clone(),
                component: command.exec.component.clone(),
            });
        }

        if let Some(group) = &command.exec.group {
            if group.is_default && !defaults.insert(group.kind) {
                return Err(DevfileError::MultipleDefaultCommands(group.kind));
            }
        }
    }

    Ok(())
}
