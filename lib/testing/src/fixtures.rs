use std::fs;
use std::io;
use std::path::Path;

use tempfile::TempDir;

/// Legacy configuration of a Node.js component with two volumes, two URLs and two env vars.
pub const LOCAL_CONFIG: &str = r#"kind: LocalConfig
apiversion: odo.dev/v1alpha1
ComponentSettings:
  Type: openshift:nodejs:12
  SourceLocation: ./
  SourceType: local
  Ports:
    - 8080/TCP
  Application: app
  Project: myproject
  Name: nodejs-app
  MaxMemory: 512Mi
  DebugPort: 5858
  Storage:
    - Name: data
      Size: 1Gi
      Path: /data
    - Name: cache
      Size: 512Mi
      Path: /cache
  Url:
    - Name: http
      Port: 8080
      Secure: false
    - Name: https
      Port: 8443
      Secure: true
  Envs:
    - Name: NODE_ENV
      Value: development
    - Name: PORT
      Value: "8080"
"#;

/// Minimal legacy configuration: no storage, no URLs, no env vars and no debug port.
pub const MINIMAL_LOCAL_CONFIG: &str = r#"kind: LocalConfig
apiversion: odo.dev/v1alpha1
ComponentSettings:
  Type: openshift:nodejs:12
  SourceType: git
  Application: app
  Project: myproject
  Name: minimal
"#;

pub const NODEJS_PULL_SPEC: &str = "registry.access.redhat.com/ubi8/nodejs-12:latest";

/// Image catalog holding `openshift:nodejs:12` and its builder image metadata.
pub const IMAGE_CATALOG: &str = r#"imageStreams:
  - metadata:
      name: nodejs
      namespace: openshift
    spec:
      tags:
        - name: "12"
          from:
            kind: DockerImage
            name: registry.access.redhat.com/ubi8/nodejs-12:latest
    status:
      tags:
        - tag: "12"
          items:
            - image: sha256:5f8a
              dockerImageReference: registry.access.redhat.com/ubi8/nodejs-12@sha256:5f8a
images:
  - metadata:
      name: sha256:5f8a
    dockerImageReference: registry.access.redhat.com/ubi8/nodejs-12@sha256:5f8a
    dockerImageMetadata:
      Config:
        WorkingDir: /opt/app-root/src
        Env:
          - STI_SCRIPTS_URL=image:///usr/libexec/s2i
        Labels:
          io.openshift.s2i.scripts-url: image:///usr/libexec/s2i
          io.openshift.s2i.destination: /tmp
"#;

/// Creates a temporary workspace holding `.odo/config.yaml` with the given contents.
pub fn workspace(local_config: &str) -> io::Result<TempDir> {
    let dir = TempDir::new()?;
    write_local_config(dir.path(), local_config)?;
    Ok(dir)
}

pub fn write_local_config(dir: &Path, local_config: &str) -> io::Result<()> {
    let config_dir = dir.join(".odo");
    fs::create_dir_all(&config_dir)?;
    fs::write(config_dir.join("config.yaml"), local_config)
}

/// Writes the image catalog into `dir` and returns its path.
pub fn write_image_catalog(dir: &Path) -> io::Result<std::path::PathBuf> {
    let path = dir.join("catalog.yaml");
    fs::write(&path, IMAGE_CATALOG)?;
    Ok(path)
}
